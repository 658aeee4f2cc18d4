//! Error types for financial data retrieval

use thiserror::Error;

/// Why a single data source could not produce a result
///
/// Every variant is recoverable: the quote resolver records it and moves
/// on to the next source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceFailure {
    /// The source needs a credential that is not configured
    #[error("no credential configured")]
    MissingCredential,

    /// Connection, DNS, TLS or body-read fault
    #[error("transport failure: {0}")]
    Transport(String),

    /// The source answered with a status other than 200
    #[error("unsuccessful response {status}: {body}")]
    UnsuccessfulResponse { status: u16, body: String },

    /// The source answered but the expected field was missing or unusable
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for SourceFailure {
    fn from(err: reqwest::Error) -> Self {
        SourceFailure::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SourceFailure {
    fn from(err: serde_json::Error) -> Self {
        SourceFailure::MalformedPayload(err.to_string())
    }
}

/// Errors raised while setting up the finance tools
#[derive(Debug, Error)]
pub enum FinanceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for finance operations
pub type Result<T> = std::result::Result<T, FinanceError>;

impl From<FinanceError> for agent_core::Error {
    fn from(err: FinanceError) -> Self {
        agent_core::Error::ToolFailed(err.to_string())
    }
}
