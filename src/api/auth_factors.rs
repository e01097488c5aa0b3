//! Multi-factor authentication service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AuthFactorsContainer, OtpDevicesContainer, ResponseEnvelope, UserId};
use crate::Result;

/// Service for a user's authentication factors.
///
/// # Example
///
/// ```no_run
/// use onelogin_rs::UserId;
///
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// let user = UserId::new(32715399);
///
/// let available = client.auth_factors().available(user).await?.ensure_success()?;
/// let enrolled = client.auth_factors().enrolled(user).await?.ensure_success()?;
/// # Ok(())
/// # }
/// ```
pub struct AuthFactorsService {
    inner: Arc<ClientInner>,
}

impl AuthFactorsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Factors the user can enroll in.
    pub async fn available(
        &self,
        user_id: UserId,
    ) -> Result<ResponseEnvelope<AuthFactorsContainer>> {
        self.inner
            .get(&format!("/api/1/users/{}/auth_factors", user_id))
            .await
    }

    /// Devices the user has already enrolled.
    pub async fn enrolled(&self, user_id: UserId) -> Result<ResponseEnvelope<OtpDevicesContainer>> {
        self.inner
            .get(&format!("/api/1/users/{}/otp_devices", user_id))
            .await
    }
}
