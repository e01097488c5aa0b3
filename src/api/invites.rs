//! Invites service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{EmptyResponse, ResponseEnvelope};
use crate::Result;

const INVITES: &str = "/api/1/invites";

/// Service for user invitations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// client
///     .invites()
///     .send_invite_link("user@example.com", Some("personal@example.com"))
///     .await?
///     .ensure_success()?;
/// # Ok(())
/// # }
/// ```
pub struct InvitesService {
    inner: Arc<ClientInner>,
}

impl InvitesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Generate an invite link for an existing user.
    ///
    /// The link is the single element of `data`.
    pub async fn get_invite_link(&self, email: &str) -> Result<ResponseEnvelope<Vec<String>>> {
        #[derive(Serialize)]
        struct Request<'a> {
            email: &'a str,
        }

        self.inner
            .post(&format!("{}/get_invite_link", INVITES), &Request { email })
            .await
    }

    /// Email an invite link to an existing user.
    ///
    /// With `personal_email` set, the link goes to that address instead of
    /// the account email.
    pub async fn send_invite_link(
        &self,
        email: &str,
        personal_email: Option<&str>,
    ) -> Result<EmptyResponse> {
        #[derive(Serialize)]
        struct Request<'a> {
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            personal_email: Option<&'a str>,
        }

        self.inner
            .post(
                &format!("{}/send_invite_link", INVITES),
                &Request {
                    email,
                    personal_email,
                },
            )
            .await
    }
}
