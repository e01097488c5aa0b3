//! Error types for the OneLogin API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the single [`Error`] enum below. The client never retries or
//! recovers from any of these; they surface to the immediate caller.

use thiserror::Error;

use crate::models::Status;

/// A specialized `Result` type for OneLogin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all OneLogin API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid credentials or region supplied at construction time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client-credentials token exchange failed.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// HTTP request failed at the network level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope decoded but its status reports a failure.
    ///
    /// Only raised when the caller asks for validation, see
    /// [`ResponseEnvelope::ensure_success`](crate::models::ResponseEnvelope::ensure_success).
    #[error("API status failure: code={code}, type={kind:?}, message={message:?}")]
    ApiStatus {
        /// Status code reported inside the envelope
        code: u16,
        /// Status type, e.g. `"bad request"`
        kind: Option<String>,
        /// Human-readable message from the API
        message: Option<String>,
    },

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The client's cancellation token fired while a call was in flight.
    #[error("Request cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::ApiStatus { code, .. } => *code == 401,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad configuration, invalid input, 4xx status, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::ApiStatus { code, .. } => (400..500).contains(code),
            Error::Config(_) | Error::InvalidInput(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the envelope decoded but reported a failure.
    pub fn is_api_status(&self) -> bool {
        matches!(self, Error::ApiStatus { .. })
    }

    /// Build an [`Error::ApiStatus`] from an envelope status block.
    pub(crate) fn from_status(status: &Status) -> Self {
        Error::ApiStatus {
            code: status.code,
            kind: status.kind.clone(),
            message: status.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(Error::ApiStatus {
            code: 401,
            kind: Some("Unauthorized".into()),
            message: None,
        }
        .is_auth_error());
        assert!(!Error::Cancelled.is_auth_error());
    }

    #[test]
    fn test_error_client() {
        assert!(Error::Config("blank client id".into()).is_client_error());
        assert!(Error::ApiStatus {
            code: 404,
            kind: None,
            message: None,
        }
        .is_client_error());
        assert!(!Error::ApiStatus {
            code: 500,
            kind: None,
            message: None,
        }
        .is_client_error());
    }

    #[test]
    fn test_from_status() {
        let status = Status {
            error: true,
            code: 400,
            kind: Some("bad request".into()),
            message: Some("Invalid grant_type".into()),
        };

        match Error::from_status(&status) {
            Error::ApiStatus {
                code,
                kind,
                message,
            } => {
                assert_eq!(code, 400);
                assert_eq!(kind.as_deref(), Some("bad request"));
                assert_eq!(message.as_deref(), Some("Invalid grant_type"));
            }
            other => panic!("Expected ApiStatus error, got {other:?}"),
        }
    }
}
