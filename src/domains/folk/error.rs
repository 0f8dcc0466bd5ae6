//! Folk API error types.

use thiserror::Error;

/// Errors surfaced by the Folk API client.
///
/// The client does not retry and does not interpret the remote error body's
/// structure; a non-success status is reported verbatim for the caller to
/// present.
#[derive(Debug, Error)]
pub enum FolkError {
    /// Non-success HTTP status from the Folk API, with the raw response body.
    #[error("Folk API error {status}: {body}")]
    Remote { status: u16, body: String },

    /// Network-level failure (DNS, connection refused, host-imposed timeout).
    #[error("Folk API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response claimed success but its body was not valid JSON.
    #[error("Invalid JSON in Folk API response: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl FolkError {
    /// HTTP status code for remote errors, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_carries_status_and_body() {
        let err = FolkError::Remote {
            status: 404,
            body: r#"{"message":"person not found"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("person not found"));
    }

    #[test]
    fn test_status_accessor() {
        let err = FolkError::Remote {
            status: 422,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(422));
    }
}
