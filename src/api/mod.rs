//! API service modules for OneLogin endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the OneLogin v1 API. Every method returns the decoded
//! [`ResponseEnvelope`](crate::models::ResponseEnvelope) as-is; validate
//! it with `ensure_success` before using the payload.

mod auth_factors;
mod events;
mod groups;
mod invites;
mod roles;
mod users;

pub use auth_factors::AuthFactorsService;
pub use events::{EventsQuery, EventsService};
pub use groups::GroupsService;
pub use invites::InvitesService;
pub use roles::{RolesQuery, RolesService};
pub use users::{UsersQuery, UsersService};
