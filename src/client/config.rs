//! Client configuration options.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

/// Configuration for the OneLogin client.
///
/// # Example
///
/// ```
/// use onelogin_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, applied to the token exchange and every resource call
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Overrides the region-derived API host
    pub base_url: Option<Url>,
    /// Cancels every in-flight and future call of the client when fired
    pub cancellation: CancellationToken,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("onelogin-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
            cancellation: CancellationToken::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send every request to `base_url` instead of `https://api.<region>.onelogin.com`.
    ///
    /// Useful for private deployments and for testing against a mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Tie the client to an external cancellation token.
    ///
    /// Once the token is cancelled, pending and future calls fail with
    /// [`Error::Cancelled`](crate::Error::Cancelled).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }
}
