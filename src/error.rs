/// Errors reported by [Sort](crate::sort::Sort)
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The payload or the sort keys are empty. Detected before any work starts.
    #[error("{0}")]
    InvalidInput(String),
    /// The array stored under `key` does not hold text or numbers only.
    #[error("error sorting key {key}: unsupported type for key {key}: {reason}")]
    UnsupportedType {
        /// The payload key of the rejected array
        key: String,
        /// What was found instead of a supported element
        reason: String,
    },
    /// The worker pool failed to start or to shut down.
    #[error("sort execution failed: {0}")]
    Execution(anyhow::Error),
}

impl SortError {
    /// True when the error was caused by the caller's input rather than by the engine. A
    /// transport maps client errors to a 4xx status and everything else to a 5xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SortError::InvalidInput(_))
    }

    pub(crate) fn unsupported_type(key: &str, reason: String) -> SortError {
        SortError::UnsupportedType {
            key: key.to_string(),
            reason,
        }
    }
}
