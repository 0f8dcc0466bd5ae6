//! Error types and handling for the MCP server.
//!
//! Folk API failures never reach this type during normal operation: they are
//! converted to failure envelopes at the tool boundary. What remains here is
//! startup and infrastructure failure.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Missing credentials land here and are
    /// fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the Folk API client.
    #[error("Folk API error: {0}")]
    Folk(#[from] crate::domains::folk::FolkError),

    /// I/O errors from the transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::folk::FolkError;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("FOLK_API_KEY environment variable is required");
        assert!(err.to_string().contains("FOLK_API_KEY"));
    }

    #[test]
    fn test_folk_error_converts() {
        let folk = FolkError::Remote {
            status: 500,
            body: "oops".to_string(),
        };
        let err: Error = folk.into();
        assert!(err.to_string().contains("500"));
    }
}
