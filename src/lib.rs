//! # onelogin-rs
//!
//! An async Rust client for the OneLogin identity-management API (v1).
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials exchange, performed lazily
//!   on the first call and cached for the life of the client
//! - **Typed envelopes**: every call decodes into a
//!   [`ResponseEnvelope`](models::ResponseEnvelope) whose status you validate
//!   explicitly
//! - **Cursor pagination**: walk `next_link` / `previous_link` chains forward
//!   or backward with an explicit page budget
//! - **Services**: groups, users, roles, authentication factors, events and
//!   invites
//! - **Async-first**: built on Tokio and reqwest, with request timeouts and
//!   cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onelogin_rs::OneLoginClient;
//! use onelogin_rs::client::PageLimit;
//!
//! #[tokio::main]
//! async fn main() -> onelogin_rs::Result<()> {
//!     // Validates the credentials; no network traffic yet.
//!     let client = OneLoginClient::new("client-id", "client-secret", "us")?;
//!
//!     // First call exchanges the credentials for a bearer token.
//!     let first = client.users().list(None).await?;
//!     let users = first.clone().ensure_success()?.unwrap_or_default();
//!     println!("First page: {} users", users.len());
//!
//!     // Follow the cursor links for up to 10 more pages.
//!     for page in client.next_pages(&first, PageLimit::Pages(10)).await? {
//!         let users = page.ensure_success()?.unwrap_or_default();
//!         println!("Next page: {} users", users.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::ClientIdentity;
pub use client::{ClientConfig, OneLoginClient};
pub use error::{Error, Result};
pub use models::{Pageable, Region, ResponseEnvelope, UserId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use onelogin_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{EventsQuery, RolesQuery, UsersQuery};
    pub use crate::auth::ClientIdentity;
    pub use crate::client::{ClientConfig, Direction, OneLoginClient, PageLimit};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        Region, UserId,
        // Envelope
        EmptyResponse, Pageable, Pagination, ResponseEnvelope, Status,
        // Payloads
        AuthFactorsContainer, AvailableAuthFactor, Event, EventType, Group, NewEvent,
        OtpDevice, OtpDevicesContainer, Role, User, UserApp,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_creation() {
        let user = UserId::new(32715399);
        assert_eq!(user.get(), 32715399);
    }

    #[test]
    fn test_region_urls() {
        assert_eq!(Region::Us.api_base_url(), "https://api.us.onelogin.com");
        assert_eq!(Region::Eu.api_base_url(), "https://api.eu.onelogin.com");
    }

    #[test]
    fn test_client_validation() {
        assert!(OneLoginClient::new("Client id", "Client Secret", "us").is_ok());
        assert!(OneLoginClient::new(String::new(), "Client Secret", "us").is_err());
        assert!(OneLoginClient::new("Client id", "    ", "us").is_err());
        assert!(OneLoginClient::new("Client id", "Client Secret", "hello").is_err());
    }
}
