//! Error types shared by the summarization, fetch, and annotation services.

use thiserror::Error;

/// Errors surfaced to callers of the functional core.
///
/// Every variant is recoverable at the UI boundary: handlers render the
/// message instead of crashing the process.
#[derive(Debug, Error)]
pub enum NlpError {
    /// User input was unusable: empty or too-short text, malformed URL.
    #[error("invalid input: {0}")]
    Input(String),

    /// An outbound fetch failed: connection error, non-2xx status, or a
    /// response that is not HTML.
    #[error("network error: {0}")]
    Network(String),

    /// The NER model could not be loaded. Fatal at startup.
    #[error("NER model unavailable: {0}")]
    ModelUnavailable(String),
}

impl NlpError {
    /// Stable machine-readable kind, used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            NlpError::Input(_) => "input",
            NlpError::Network(_) => "network",
            NlpError::ModelUnavailable(_) => "model_unavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, NlpError>;
