//! Workflow client errors
//!
//! Server rejection reasons (conflict, not-found) are carried verbatim so the
//! UI can surface exactly what the backend said; transport and decode
//! failures collapse into a generic retryable message.

use ezra_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Server-side 409; message is the backend's, verbatim.
    #[error("{0}")]
    Conflict(String),

    /// Server-side 404; message is the backend's, verbatim.
    #[error("{0}")]
    NotFound(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// The same operation is already in flight; no request was issued.
    #[error("Operation already in progress")]
    OperationInFlight,
}

impl ApiError {
    /// Message suitable for direct display. Transport-level failures get the
    /// generic "try again" copy; everything else shows its own text.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => {
                "No response from server. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Auth(_) | ApiError::Server { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_messages_surface_verbatim() {
        let err = ApiError::Conflict(
            "A lease already exists with ID: 42. Set replace_existing=true to override.".to_string(),
        );
        assert!(err.display_message().contains("ID: 42"));
    }

    #[test]
    fn test_decode_failure_gets_generic_copy() {
        let err = ApiError::Decode("expected JSON".to_string());
        assert_eq!(err.display_message(), "No response from server. Please try again.");
    }
}
