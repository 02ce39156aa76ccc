use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::payload::Payload;

/// Body of a sort request could not be decoded
pub const INVALID_JSON: &str = "invalid JSON format";
/// Sort request without sort keys
pub const INVALID_SORT_KEYS: &str = "sortKeys must be a non-empty array";
/// Sort request without payload
pub const INVALID_PAYLOAD: &str = "payload must be a non-empty map";

/// A sort request as received by the HTTP transport
///
/// ```json
/// {"sortKeys": ["fruits"], "payload": {"fruits": ["banana", "apple"]}}
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SortRequest {
    /// Keys of the payload arrays to sort
    #[serde(rename = "sortKeys", default)]
    pub sort_keys: Vec<String>,
    /// The values to sort
    #[serde(default)]
    pub payload: Option<Payload>,
}

impl SortRequest {
    /// Reject requests without sort keys or without payload before they reach the engine.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.sort_keys.is_empty() {
            return Err(SortError::InvalidInput(INVALID_SORT_KEYS.to_string()));
        }
        match &self.payload {
            Some(payload) if !payload.is_empty() => Ok(()),
            _ => Err(SortError::InvalidInput(INVALID_PAYLOAD.to_string())),
        }
    }
}
