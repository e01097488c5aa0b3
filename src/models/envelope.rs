//! The `{status, data, pagination}` envelope every OneLogin call returns.
//!
//! Decoding and validation are two separate steps: any envelope decodes,
//! including ones whose status reports a failure, and the caller decides
//! when to call [`ResponseEnvelope::ensure_success`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Status block of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Set by the API when the call failed.
    #[serde(default)]
    pub error: bool,
    /// HTTP-like status code
    pub code: u16,
    /// Status type, e.g. `"success"` or `"bad request"`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl Status {
    /// Returns `true` if the status reports success.
    pub fn is_success(&self) -> bool {
        !self.error && (200..300).contains(&self.code)
    }
}

/// Cursor links for paginated list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Opaque cursor of the previous page
    #[serde(default)]
    pub before_cursor: Option<String>,
    /// Opaque cursor of the next page
    #[serde(default)]
    pub after_cursor: Option<String>,
    /// Absolute URL of the previous page
    #[serde(default)]
    pub previous_link: Option<String>,
    /// Absolute URL of the next page
    #[serde(default)]
    pub next_link: Option<String>,
    /// Absolute URL of the last page
    #[serde(default)]
    pub last_link: Option<String>,
}

/// Typed response envelope.
///
/// `D` is the shape of `data` for the call: a `Vec<_>` for list endpoints,
/// a container struct for a few others.
///
/// # Example
///
/// ```
/// use onelogin_rs::models::{Group, ResponseEnvelope};
///
/// let body = r#"{
///     "status": {"error": false, "code": 200, "type": "success", "message": "Success"},
///     "data": [{"id": 1, "name": "Admins", "reference": null}]
/// }"#;
///
/// let envelope: ResponseEnvelope<Vec<Group>> = serde_json::from_str(body).unwrap();
/// let groups = envelope.ensure_success().unwrap().unwrap_or_default();
/// assert_eq!(groups[0].name, "Admins");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<D> {
    /// Outcome of the call
    pub status: Status,
    /// Payload, absent or `null` for calls that return none
    pub data: Option<D>,
    /// Cursor links, present on list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Envelope for calls whose payload is irrelevant to the caller.
pub type EmptyResponse = ResponseEnvelope<serde_json::Value>;

impl<D> ResponseEnvelope<D> {
    /// Validate the status block without consuming the envelope.
    pub fn check(&self) -> Result<()> {
        if self.status.is_success() {
            Ok(())
        } else {
            Err(Error::from_status(&self.status))
        }
    }

    /// Validate the status and hand back the payload unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiStatus`] if the status reports a failure.
    pub fn ensure_success(self) -> Result<Option<D>> {
        self.check()?;
        Ok(self.data)
    }
}

/// A response that carries cursor links and can be walked page by page.
///
/// See [`OneLoginClient::next_pages`](crate::OneLoginClient::next_pages).
pub trait Pageable {
    /// The pagination block, if the response has one.
    fn pagination(&self) -> Option<&Pagination>;

    /// Link to the following page.
    fn next_link(&self) -> Option<&str> {
        self.pagination().and_then(|p| p.next_link.as_deref())
    }

    /// Link to the preceding page.
    fn previous_link(&self) -> Option<&str> {
        self.pagination().and_then(|p| p.previous_link.as_deref())
    }
}

impl<D> Pageable for ResponseEnvelope<D> {
    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(code: u16, error: bool) -> ResponseEnvelope<Vec<i32>> {
        ResponseEnvelope {
            status: Status {
                error,
                code,
                kind: None,
                message: Some("msg".into()),
            },
            data: Some(vec![1, 2, 3]),
            pagination: None,
        }
    }

    #[test]
    fn test_ensure_success_returns_data() {
        let data = envelope(200, false).ensure_success().unwrap();
        assert_eq!(data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_ensure_success_failure_code() {
        let err = envelope(401, false).ensure_success().unwrap_err();
        assert!(matches!(err, Error::ApiStatus { code: 401, .. }));
    }

    #[test]
    fn test_ensure_success_error_flag() {
        // error flag wins even with a 2xx code
        let err = envelope(200, true).ensure_success().unwrap_err();
        assert!(err.is_api_status());
    }

    #[test]
    fn test_decode_failure_envelope() {
        let body = json!({
            "status": {
                "error": true,
                "code": 401,
                "type": "Unauthorized",
                "message": "Authentication Failure"
            }
        });

        let envelope: ResponseEnvelope<Vec<i32>> = serde_json::from_value(body).unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.pagination.is_none());
        match envelope.ensure_success().unwrap_err() {
            Error::ApiStatus { code, kind, message } => {
                assert_eq!(code, 401);
                assert_eq!(kind.as_deref(), Some("Unauthorized"));
                assert_eq!(message.as_deref(), Some("Authentication Failure"));
            }
            other => panic!("Expected ApiStatus error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_payload_without_default() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Container {
            factors: Vec<String>,
        }

        let missing: ResponseEnvelope<Container> =
            serde_json::from_value(json!({ "status": { "code": 200 } })).unwrap();
        assert!(missing.ensure_success().unwrap().is_none());

        let null: ResponseEnvelope<Container> =
            serde_json::from_value(json!({ "status": { "code": 200 }, "data": null })).unwrap();
        assert!(null.data.is_none());

        let present: ResponseEnvelope<Container> = serde_json::from_value(json!({
            "status": { "code": 200 },
            "data": { "factors": ["OneLogin SMS"] }
        }))
        .unwrap();
        assert_eq!(
            present.ensure_success().unwrap(),
            Some(Container {
                factors: vec!["OneLogin SMS".to_string()]
            })
        );
    }

    #[test]
    fn test_pageable_links() {
        let body = json!({
            "status": {"error": false, "code": 200, "type": "success", "message": "Success"},
            "pagination": {
                "before_cursor": null,
                "after_cursor": "abc",
                "previous_link": null,
                "next_link": "https://api.us.onelogin.com/api/1/users?after_cursor=abc"
            },
            "data": []
        });

        let envelope: ResponseEnvelope<Vec<i32>> = serde_json::from_value(body).unwrap();
        assert_eq!(
            envelope.next_link(),
            Some("https://api.us.onelogin.com/api/1/users?after_cursor=abc")
        );
        assert_eq!(envelope.previous_link(), None);
    }

    #[test]
    fn test_no_pagination_block() {
        let envelope = envelope(200, false);
        assert!(envelope.next_link().is_none());
        assert!(envelope.previous_link().is_none());
    }
}
