//! Error types for tool execution

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied parameters that do not match the tool's schema
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// No tool with this name is registered
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The tool ran but could not produce a result
    #[error("Tool execution failed: {0}")]
    ToolFailed(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidParameters(err.to_string())
    }
}
