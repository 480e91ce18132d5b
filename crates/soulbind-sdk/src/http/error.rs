/*
[INPUT]:  Error sources (HTTP transport, status, serialization, signing)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Soulbind SDK
#[derive(Error, Debug)]
pub enum SoulbindError {
    /// Network-level failure before a status line was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status. The message is the status
    /// text, which is all the API exposes on this path.
    #[error("{status_text}")]
    RequestFailed { status_text: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signature could not be parsed or the signer recovered
    #[error("Signature error: {0}")]
    Signature(String),

    /// Well-formed HTTP response with an unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Custodial wallet provider failure
    #[error("Wallet provider error: {0}")]
    Wallet(String),
}

impl SoulbindError {
    /// Check whether the error came from the transport/status layer, as
    /// opposed to local validation or signing.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SoulbindError::Http(_) | SoulbindError::RequestFailed { .. }
        )
    }

    /// Create a `RequestFailed` from a response status
    pub(crate) fn request_failed(status: StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        SoulbindError::RequestFailed { status_text }
    }
}

/// Result type alias for Soulbind operations
pub type Result<T> = std::result::Result<T, SoulbindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_displays_status_text() {
        let err = SoulbindError::request_failed(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found");

        let err = SoulbindError::request_failed(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_is_transport() {
        assert!(SoulbindError::request_failed(StatusCode::BAD_GATEWAY).is_transport());
        assert!(!SoulbindError::Config("missing key".to_string()).is_transport());
        assert!(!SoulbindError::Signature("truncated".to_string()).is_transport());
    }
}
