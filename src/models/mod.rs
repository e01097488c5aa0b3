//! Data models for the OneLogin API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Core types like [`Region`] and [`UserId`]
//! - [`envelope`] - The response envelope, status and pagination blocks
//! - [`token`] - Token endpoint payloads
//! - [`group`] - Groups and roles
//! - [`user`] - Users and their apps
//! - [`auth_factor`] - MFA factors and enrolled devices
//! - [`event`] - Event log entries and types

pub mod primitives;
pub mod envelope;
pub mod token;
pub mod group;
pub mod user;
pub mod auth_factor;
pub mod event;

// Re-export commonly used types
pub use primitives::*;
pub use envelope::*;
pub use token::*;
pub use group::*;
pub use user::*;
pub use auth_factor::*;
pub use event::*;
