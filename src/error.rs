//! Fetch Error Types
//!
//! Every request the dashboard makes resolves to `Result<T, FetchError>`.
//! Errors are `Clone` so they can live inside reactive signals.

use thiserror::Error;

/// Errors from retrieving a dashboard resource
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// Body is not JSON of the expected outer shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required key is absent from the payload
    #[error("Missing key: {0}")]
    MissingKey(&'static str),
}

impl FetchError {
    /// Transient failures worth another attempt: network errors and 5xx
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Parse(_) | FetchError::MissingKey(_) => false,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
