//! HTTP client and service layer for the OneLogin API.
//!
//! This module provides the main entry point [`OneLoginClient`], the
//! generic GET/POST invoker behind every service, and the cursor-link
//! pagination walker.
//!
//! # Example
//!
//! ```no_run
//! use onelogin_rs::OneLoginClient;
//! use onelogin_rs::client::PageLimit;
//!
//! # async fn example() -> onelogin_rs::Result<()> {
//! let client = OneLoginClient::new("client-id", "client-secret", "eu")?;
//!
//! let first = client.users().list(None).await?;
//! let rest = client.next_pages(&first, PageLimit::Pages(10)).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::ClientConfig;
pub use http::OneLoginClient;
pub use paginated::{Direction, PageLimit, PageStream};
pub(crate) use http::{execute, ClientInner};
