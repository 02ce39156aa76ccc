use std::fmt::{Display, Formatter};

use serde_json::Value;

/// Element type of a sortable array
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    /// String, compared lexicographically
    Text,
    /// JSON number, compared as a 64 bit floating point number
    Number,
}

impl ElementType {
    /// Classify a single JSON value. Returns `None` for values that can not be sorted:
    /// booleans, nulls, objects and nested arrays.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use payload_sort::element_type::ElementType;
    ///
    /// assert_eq!(ElementType::classify(&json!("apple")), Some(ElementType::Text));
    /// assert_eq!(ElementType::classify(&json!(4)), Some(ElementType::Number));
    /// assert_eq!(ElementType::classify(&json!(true)), None);
    /// ```
    pub fn classify(value: &Value) -> Option<ElementType> {
        match value {
            Value::String(_) => Some(ElementType::Text),
            Value::Number(_) => Some(ElementType::Number),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Text => write!(f, "text"),
            ElementType::Number => write!(f, "number"),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
