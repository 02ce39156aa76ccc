//! Sorting of a single payload array.
//!
//! The element type of an array is classified once, on its first element. Every other element
//! must have the same type, otherwise the array is rejected as a whole.

use serde_json::Value;

use crate::element::Element;
use crate::element_type::{json_type_name, ElementType};
use crate::error::SortError;

/// Classify the array stored under `key`.
///
/// Returns `Ok(None)` for an empty array, which needs no sorting.
pub fn classify(key: &str, elements: &[Value]) -> Result<Option<ElementType>, SortError> {
    match elements.first() {
        None => Ok(None),
        Some(first) => {
            ElementType::classify(first)
                .map(Some)
                .ok_or_else(|| {
                    SortError::unsupported_type(
                        key,
                        format!("first element is {}, expected text or number", json_type_name(first)),
                    )
                })
        }
    }
}

/// Return a new array with the `elements` of the array stored under `key` in ascending order.
/// Text is ordered lexicographically by bytes, numbers by their numeric value. Equal elements
/// may be reordered.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use payload_sort::array_sort::sort_array;
///
/// let numbers = vec![json!(1333), json!(4), json!(2431), json!(7)];
/// let sorted = sort_array("numbers", &numbers).unwrap();
/// assert_eq!(sorted, vec![json!(4), json!(7), json!(1333), json!(2431)]);
/// ```
pub fn sort_array(key: &str, elements: &[Value]) -> Result<Vec<Value>, SortError> {
    let mut converted = convert(key, elements)?;
    converted.sort_unstable();
    Ok(converted.into_iter().map(Element::into_value).collect())
}

/// Check whether the array stored under `key` is already in ascending order.
pub fn is_sorted(key: &str, elements: &[Value]) -> Result<bool, SortError> {
    let converted = convert(key, elements)?;
    Ok(converted.windows(2).all(|pair| pair[0] <= pair[1]))
}

fn convert(key: &str, elements: &[Value]) -> Result<Vec<Element>, SortError> {
    let element_type = match classify(key, elements)? {
        None => return Ok(Vec::new()),
        Some(element_type) => element_type,
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Element::new(value, element_type).ok_or_else(|| {
                SortError::unsupported_type(
                    key,
                    format!("element {} is {}, expected {}", index, json_type_name(value), element_type),
                )
            })
        })
        .collect()
}
