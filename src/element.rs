use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::element_type::ElementType;

/// A single array element, converted for comparison under a classified [ElementType].
#[derive(Debug)]
pub(crate) enum Element {
    Text {
        s: String
    },
    Number {
        n: f64,
        exact: Option<i128>,
        number: Number,
    },
}

impl Element {
    /// Returns `None` when `value` does not match `element_type`
    pub(crate) fn new(value: &Value, element_type: ElementType) -> Option<Element> {
        match (element_type, value) {
            (ElementType::Text, Value::String(s)) => {
                Some(
                    Element::Text {
                        s: s.clone()
                    }
                )
            }
            (ElementType::Number, Value::Number(number)) => {
                let n = number.as_f64()?;
                Some(
                    Element::Number {
                        n,
                        exact: exact_integer(number, n),
                        number: number.clone(),
                    }
                )
            }
            _ => None,
        }
    }

    /// Integers stay integers: the original JSON number is returned, not the f64 used for
    /// comparison.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Element::Text { s } => Value::String(s),
            Element::Number { number, .. } => Value::Number(number),
        }
    }
}

/// Exact value of an integer or of an integral float. Above 2^53 every f64 is integral, so numbers
/// with equal f64 values either all have an exact value or none has.
fn exact_integer(number: &Number, n: f64) -> Option<i128> {
    if let Some(i) = number.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = number.as_u64() {
        return Some(i128::from(u));
    }
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e38 {
        Some(n as i128)
    } else {
        None
    }
}

impl Eq for Element {}

impl PartialEq<Self> for Element {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Text { s }, Element::Text { s: other_s }) => s.as_str().cmp(other_s.as_str()),
            (Element::Number { n, exact, .. }, Element::Number { n: other_n, exact: other_exact, .. }) => {
                // f64 conversion is monotonic, integers that round to the same f64 are told apart exactly
                n.total_cmp(other_n).then_with(|| match (exact, other_exact) {
                    (Some(i), Some(other_i)) => i.cmp(other_i),
                    _ => Ordering::Equal,
                })
            }
            // arrays are homogeneous after classification, numbers go first otherwise
            (Element::Number { .. }, Element::Text { .. }) => Ordering::Less,
            (Element::Text { .. }, Element::Number { .. }) => Ordering::Greater,
        }
    }
}
