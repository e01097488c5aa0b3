//! Client credentials and their validation.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Region, Result};

/// Validated client id, secret and region.
///
/// Construction fails fast on blank credentials or an unknown region, before
/// any network activity.
///
/// # Example
///
/// ```
/// use onelogin_rs::{ClientIdentity, Region};
///
/// let identity = ClientIdentity::new("client-id", "client-secret", "eu")?;
/// assert_eq!(identity.region(), Region::Eu);
///
/// assert!(ClientIdentity::new("   ", "client-secret", "us").is_err());
/// assert!(ClientIdentity::new("client-id", "client-secret", "apac").is_err());
/// # Ok::<(), onelogin_rs::Error>(())
/// ```
#[derive(Clone)]
pub struct ClientIdentity {
    client_id: String,
    client_secret: SecretString,
    region: Region,
}

impl ClientIdentity {
    /// Validate credentials against a region code (`"us"` or `"eu"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either credential is blank or
    /// whitespace-only, or if the region code is not recognised.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        region: &str,
    ) -> Result<Self> {
        Self::with_region(client_id, client_secret, region.parse()?)
    }

    /// Validate credentials for an already-typed [`Region`].
    pub fn with_region(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        region: Region,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(Error::Config("client id must not be blank".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(Error::Config("client secret must not be blank".to_string()));
        }

        Ok(Self {
            client_id,
            client_secret: SecretString::from(client_secret),
            region,
        })
    }

    /// The OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The region the account lives in.
    pub fn region(&self) -> Region {
        self.region
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

impl std::fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("region", &self.region)
            .finish()
    }
}
