//! HTTP client implementation for the OneLogin API.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::api::{
    AuthFactorsService, EventsService, GroupsService, InvitesService, RolesService, UsersService,
};
use crate::auth::{ClientIdentity, GenerateTokensResponse, TokenManager};
use crate::models::ResponseEnvelope;
use crate::{Error, Region, Result};

use super::config::ClientConfig;

/// The main client for interacting with the OneLogin API.
///
/// Construction only validates the credentials; the token exchange happens
/// lazily on the first resource call and its result is cached for the life
/// of the client. Clones share that cache.
///
/// Every service call returns the decoded [`ResponseEnvelope`] without
/// inspecting its status. Call
/// [`ensure_success`](ResponseEnvelope::ensure_success) before trusting the
/// payload.
///
/// # Example
///
/// ```no_run
/// use onelogin_rs::{OneLoginClient, UserId};
///
/// # async fn example() -> onelogin_rs::Result<()> {
/// let client = OneLoginClient::new("client-id", "client-secret", "us")?;
///
/// let users = client.users().list(None).await?.ensure_success()?;
///
/// let roles = client
///     .users()
///     .roles(UserId::new(32715399))
///     .await?
///     .ensure_success()?;
/// # Ok(())
/// # }
/// ```
pub struct OneLoginClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) tokens: TokenManager,
}

impl OneLoginClient {
    /// Create a client for the given credentials and region code
    /// (`"us"` or `"eu"`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for blank credentials or an unknown region.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        region: &str,
    ) -> Result<Self> {
        Self::with_config(
            ClientIdentity::new(client_id, client_secret, region)?,
            ClientConfig::default(),
        )
    }

    /// Create a client for the US region.
    pub fn us(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(
            ClientIdentity::with_region(client_id, client_secret, Region::Us)?,
            ClientConfig::default(),
        )
    }

    /// Create a client with validated credentials and custom configuration.
    pub fn with_config(identity: ClientIdentity, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                tokens: TokenManager::new(identity, config)?,
            }),
        })
    }

    /// Get the groups service.
    pub fn groups(&self) -> GroupsService {
        GroupsService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the roles service.
    pub fn roles(&self) -> RolesService {
        RolesService::new(self.inner.clone())
    }

    /// Get the authentication factors service.
    pub fn auth_factors(&self) -> AuthFactorsService {
        AuthFactorsService::new(self.inner.clone())
    }

    /// Get the events service.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Get the invites service.
    pub fn invites(&self) -> InvitesService {
        InvitesService::new(self.inner.clone())
    }

    /// Perform a raw token exchange.
    ///
    /// Returns the decoded token envelope without validating it and without
    /// touching the cached transport. Resource calls do not need this; they
    /// authenticate on their own.
    pub async fn generate_tokens(&self) -> Result<GenerateTokensResponse> {
        self.inner.tokens.generate_tokens().await
    }

    /// Authenticate now instead of on the first resource call.
    pub async fn authenticate(&self) -> Result<()> {
        self.inner.tokens.acquire_transport().await.map(|_| ())
    }

    /// Returns `true` once the token exchange has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.inner.tokens.is_authenticated()
    }

    /// GET an arbitrary path (or absolute URL) and decode the body as `T`.
    ///
    /// Escape hatch for endpoints without a dedicated service method.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.inner.get(path).await
    }

    /// GET with query parameters; `None` fields of `query` are omitted.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.inner.get_with_query(path, query).await
    }

    /// POST a JSON body to an arbitrary path and decode the body as `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.inner.post(path, body).await
    }

    /// GET an envelope and validate its status in one step.
    ///
    /// Returns the envelope's `data` or [`Error::ApiStatus`].
    pub async fn get_data<D: DeserializeOwned>(&self, path: &str) -> Result<Option<D>> {
        self.inner.get_data(path).await
    }

    /// POST a JSON body and validate the returned envelope in one step.
    pub async fn post_data<D: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<D>> {
        self.inner.post_data(path, body).await
    }

    /// The credentials this client was built with.
    pub fn identity(&self) -> &ClientIdentity {
        self.inner.tokens.identity()
    }

    /// The cancellation token guarding this client's calls.
    pub fn cancellation_token(&self) -> &CancellationToken {
        self.inner.cancellation()
    }
}

impl ClientInner {
    pub(crate) fn cancellation(&self) -> &CancellationToken {
        self.tokens.cancellation()
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let transport = self.tokens.acquire_transport().await?;
        let url = resolve_url(&transport.base_url, path)?;

        self.send(transport.http.get(url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let transport = self.tokens.acquire_transport().await?;
        let url = resolve_url(&transport.base_url, path)?;

        self.send(transport.http.get(url).query(query)).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_vec(body)?;
        let transport = self.tokens.acquire_transport().await?;
        let url = resolve_url(&transport.base_url, path)?;

        let request = transport
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);

        self.send(request).await
    }

    /// GET, decode and validate in one step.
    pub(crate) async fn get_data<D: DeserializeOwned>(&self, path: &str) -> Result<Option<D>> {
        self.get::<ResponseEnvelope<D>>(path).await?.ensure_success()
    }

    /// POST, decode and validate in one step.
    pub(crate) async fn post_data<D: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<D>> {
        self.post::<ResponseEnvelope<D>, B>(path, body)
            .await?
            .ensure_success()
    }

    /// Send a request and decode the body, whatever the HTTP status.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let (status, text) = execute(self.cancellation(), request).await?;
        debug!(%status, bytes = text.len(), "Response received");

        Ok(serde_json::from_str(&text)?)
    }
}

/// Send a request and read the body as text, aborting if `cancel` fires
/// first.
pub(crate) async fn execute(
    cancel: &CancellationToken,
    request: RequestBuilder,
) -> Result<(StatusCode, String)> {
    let exchange = async {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok::<_, Error>((status, text))
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = exchange => result,
    }
}

/// Resolve a resource path against the base URL.
///
/// Absolute URLs (pagination links) are used verbatim; anything else is
/// joined below the base path.
pub(crate) fn resolve_url(base: &Url, path: &str) -> Result<Url> {
    match Url::parse(path) {
        Ok(url) if url.has_host() => Ok(url),
        _ => Ok(base.join(path.trim_start_matches('/'))?),
    }
}

impl Clone for OneLoginClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for OneLoginClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneLoginClient")
            .field("tokens", &self.inner.tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.us.onelogin.com/").unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_url(&base(), "/api/1/groups").unwrap().as_str(),
            "https://api.us.onelogin.com/api/1/groups"
        );
        assert_eq!(
            resolve_url(&base(), "api/1/users/5/roles").unwrap().as_str(),
            "https://api.us.onelogin.com/api/1/users/5/roles"
        );
    }

    #[test]
    fn test_resolve_keeps_base_prefix() {
        let base = Url::parse("http://127.0.0.1:4000/proxy/").unwrap();
        assert_eq!(
            resolve_url(&base, "/api/1/groups").unwrap().as_str(),
            "http://127.0.0.1:4000/proxy/api/1/groups"
        );
    }

    #[test]
    fn test_resolve_absolute_link() {
        let link = "https://api.us.onelogin.com/api/1/users?after_cursor=abc";
        assert_eq!(resolve_url(&base(), link).unwrap().as_str(), link);
    }

    #[test]
    fn test_client_construction_is_offline() {
        let client = OneLoginClient::new("id", "secret", "us").unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.identity().region(), Region::Us);
    }

    #[test]
    fn test_client_construction_fails_fast() {
        assert!(matches!(
            OneLoginClient::new("", "secret", "us"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            OneLoginClient::new("id", "secret", "hello"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = OneLoginClient::us("id", "very-secret-value").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("very-secret-value"));
    }
}
