//! Client-credentials token exchange and transport caching.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::ExposeSecret;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use super::ClientIdentity;
use crate::client::{execute, ClientConfig};
use crate::models::{AccessToken, ResponseEnvelope};
use crate::{Error, Result};

const TOKEN_PATH: &str = "auth/oauth2/token";

/// Token endpoint response.
pub type GenerateTokensResponse = ResponseEnvelope<Vec<AccessToken>>;

/// HTTP client bound to the API base URL with the bearer token installed
/// as a default header.
///
/// Built once per client by the token manager and shared by every
/// resource call afterwards.
#[derive(Clone)]
pub struct AuthenticatedTransport {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
}

impl AuthenticatedTransport {
    /// Base URL every relative resource path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for AuthenticatedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedTransport")
            .field("base_url", &self.base_url.as_str())
            .field("authorization", &"[REDACTED]")
            .finish()
    }
}

/// Exchanges client credentials for a bearer token and caches the
/// resulting [`AuthenticatedTransport`].
///
/// # Thread Safety
///
/// The cache is a [`OnceCell`]: concurrent first callers wait on a single
/// token exchange and all share its result. A failed exchange leaves the
/// cell empty, so the next caller tries again.
///
/// The token is kept for the life of the manager. Expiry is not tracked and
/// there is no refresh.
pub(crate) struct TokenManager {
    identity: ClientIdentity,
    base_url: Url,
    token_url: Url,
    config: ClientConfig,
    /// Unauthenticated client used only for the token exchange.
    http: reqwest::Client,
    transport: OnceCell<AuthenticatedTransport>,
}

impl TokenManager {
    pub(crate) fn new(identity: ClientIdentity, config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base(match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(identity.region().api_base_url())?,
        });
        let token_url = base_url.join(TOKEN_PATH)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            identity,
            base_url,
            token_url,
            config,
            http,
            transport: OnceCell::new(),
        })
    }

    pub(crate) fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub(crate) fn cancellation(&self) -> &CancellationToken {
        &self.config.cancellation
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Return the cached transport, performing the token exchange on first
    /// use.
    pub(crate) async fn acquire_transport(&self) -> Result<&AuthenticatedTransport> {
        self.transport
            .get_or_try_init(|| self.authenticate())
            .await
    }

    /// Returns `true` once a transport has been cached.
    pub(crate) fn is_authenticated(&self) -> bool {
        self.transport.initialized()
    }

    /// POST the client credentials to the token endpoint and decode the
    /// envelope, without validating or caching anything.
    ///
    /// Transport and decode failures are reported as
    /// [`Error::Authentication`].
    pub(crate) async fn generate_tokens(&self) -> Result<GenerateTokensResponse> {
        let credentials = format!(
            "{}:{}",
            self.identity.client_id(),
            self.identity.client_secret()
        );
        let mut basic =
            HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(credentials))).map_err(
                |_| Error::Config("Client credentials are not valid header text".to_string()),
            )?;
        basic.set_sensitive(true);

        let body = serde_json::to_vec(&serde_json::json!({ "grant_type": "client_credentials" }))?;

        // Exactly "application/json": the token endpoint rejects a charset suffix.
        let request = self
            .http
            .post(self.token_url.clone())
            .header(AUTHORIZATION, basic)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);

        let (status, text) = execute(self.cancellation(), request)
            .await
            .map_err(|e| match e {
                Error::Http(err) => {
                    Error::Authentication(format!("Token exchange request failed: {}", err))
                }
                other => other,
            })?;

        serde_json::from_str(&text).map_err(|err| {
            Error::Authentication(format!(
                "Token exchange returned an unreadable body ({}): {}",
                status, err
            ))
        })
    }

    #[tracing::instrument(
        skip_all,
        fields(region = %self.identity.region(), client_id = %self.identity.client_id())
    )]
    async fn authenticate(&self) -> Result<AuthenticatedTransport> {
        info!("Exchanging client credentials for an access token");

        let response = self.generate_tokens().await?;
        let tokens = response.ensure_success().map_err(|err| {
            warn!(error = %err, "Token endpoint rejected the client credentials");
            match err {
                Error::ApiStatus { code, message, .. } => Error::Authentication(format!(
                    "Token exchange failed ({}): {}",
                    code,
                    message.unwrap_or_else(|| "no message".to_string())
                )),
                other => other,
            }
        })?;

        let token = tokens
            .and_then(|tokens| tokens.into_iter().next())
            .ok_or_else(|| {
                Error::Authentication("Token endpoint returned no access token".to_string())
            })?;

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", token.access_token.expose_secret()))
                .map_err(|_| {
                    Error::Authentication(
                        "Token endpoint returned a malformed access token".to_string(),
                    )
                })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .default_headers(headers)
            .build()?;

        debug!(expires_in = ?token.expires_in, "Access token acquired");

        Ok(AuthenticatedTransport {
            http,
            base_url: self.base_url.clone(),
        })
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("identity", &self.identity)
            .field("token_url", &self.token_url.as_str())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Make sure relative joins append to the base path instead of replacing
/// its last segment.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
