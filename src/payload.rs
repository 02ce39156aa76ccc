use std::collections::HashSet;

use serde_json::{Map, Value};

/// Named values submitted for sorting. Arrays listed by the sort keys are sorted, everything
/// else is passed through untouched.
pub type Payload = Map<String, Value>;

/// Copy `payload` so that no array of the copy shares storage with the caller's payload.
pub(crate) fn isolate(payload: &Payload) -> Payload {
    payload
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Array(elements) => Value::Array(elements.iter().cloned().collect()),
                scalar => scalar.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Move the array stored under `key` out of `payload`, leaving an empty array in its place.
/// Returns `None` for absent keys, scalars and empty arrays.
pub(crate) fn take_array(payload: &mut Payload, key: &str) -> Option<Vec<Value>> {
    match payload.get_mut(key) {
        Some(Value::Array(elements)) if !elements.is_empty() => Some(std::mem::take(elements)),
        _ => None,
    }
}

/// Sort keys in their original order without duplicates
pub(crate) fn unique_keys(sort_keys: &[String]) -> Vec<&String> {
    let mut seen = HashSet::with_capacity(sort_keys.len());
    sort_keys
        .iter()
        .filter(|key| seen.insert(key.as_str()))
        .collect()
}
