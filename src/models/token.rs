//! Token endpoint payloads.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Deserialize;

/// One element of the token endpoint's `data` array.
///
/// Only `access_token` is required; the remaining fields are metadata the
/// client does not act on.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// Bearer credential for resource calls
    pub access_token: SecretString,
    /// Token type, normally `"bearer"`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Refresh token (unused, refresh is not supported)
    #[serde(default)]
    pub refresh_token: Option<SecretString>,
    /// Validity in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Issue time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// OneLogin account the token belongs to
    #[serde(default)]
    pub account_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_token_payload() {
        let token: AccessToken = serde_json::from_value(serde_json::json!({
            "access_token": "xx508xx63817x752xx74004x30705xx92x58349x5x78f5xx34xxxxx51",
            "created_at": "2015-11-11T03:36:18.714Z",
            "expires_in": 36000,
            "refresh_token": "628x9x0xx447xx4x421x517x4x474x33x2065x4x1xx523xxxxx6x7x20",
            "token_type": "bearer",
            "account_id": 555555
        }))
        .unwrap();

        assert_eq!(
            token.access_token.expose_secret(),
            "xx508xx63817x752xx74004x30705xx92x58349x5x78f5xx34xxxxx51"
        );
        assert_eq!(token.expires_in, Some(36000));
        assert_eq!(token.account_id, Some(555555));
        assert!(!format!("{token:?}").contains("xx508xx63817"));
    }

    #[test]
    fn test_token_minimal() {
        let token: AccessToken =
            serde_json::from_value(serde_json::json!({ "access_token": "tok" })).unwrap();
        assert_eq!(token.access_token.expose_secret(), "tok");
        assert!(token.refresh_token.is_none());
    }
}
