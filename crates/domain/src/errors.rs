//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the SDC client.
///
/// Failures are passed through as reported by the transport. The only
/// distinction kept is whether the backend answered at all.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SdcError {
    /// The backend answered with a non-success status. The body is kept
    /// verbatim so callers can inspect the backend's own error payload.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Platform error: {0}")]
    Platform(String),
}

impl SdcError {
    /// HTTP status reported by the backend, if it answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SdcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for SDC client operations
pub type Result<T> = std::result::Result<T, SdcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_present_for_http_failures() {
        let http = SdcError::Http { status: 404, body: "missing".into() };
        assert_eq!(http.status(), Some(404));
        assert_eq!(SdcError::Network("refused".into()).status(), None);
    }

    #[test]
    fn http_error_display_keeps_body() {
        let err = SdcError::Http { status: 500, body: r#"{"message":"boom"}"#.into() };
        assert_eq!(err.to_string(), r#"HTTP 500: {"message":"boom"}"#);
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: SdcError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SdcError::Decode(_)));
    }
}
