//! Authentication for the OneLogin API.
//!
//! OneLogin resource calls are authorized with a bearer token obtained
//! through the OAuth2 client-credentials grant:
//!
//! 1. [`ClientIdentity`] validates the client id, secret and region up front.
//! 2. On the first resource call the client POSTs the credentials (Basic
//!    auth) to `/auth/oauth2/token`.
//! 3. The returned access token is installed on an [`AuthenticatedTransport`]
//!    that is cached and reused for every later call.
//!
//! There is no refresh flow: the token is held for the life of the client.
//!
//! ```no_run
//! use onelogin_rs::OneLoginClient;
//!
//! # async fn example() -> onelogin_rs::Result<()> {
//! let client = OneLoginClient::new("client-id", "client-secret", "us")?;
//!
//! // No network traffic until here; this call performs the token exchange.
//! let groups = client.groups().list().await?.ensure_success()?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod token;

pub use credentials::ClientIdentity;
pub use token::{AuthenticatedTransport, GenerateTokensResponse};
pub(crate) use token::TokenManager;
