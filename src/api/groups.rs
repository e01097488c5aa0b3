//! Groups service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Group, ResponseEnvelope};
use crate::Result;

const GROUPS: &str = "/api/1/groups";

/// Service for group operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// let groups = client.groups().list().await?.ensure_success()?.unwrap_or_default();
/// for group in groups {
///     println!("{}: {}", group.id, group.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GroupsService {
    inner: Arc<ClientInner>,
}

impl GroupsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List groups, up to 50 per page.
    pub async fn list(&self) -> Result<ResponseEnvelope<Vec<Group>>> {
        self.inner.get(GROUPS).await
    }

    /// Get a single group by ID.
    pub async fn get(&self, id: i64) -> Result<ResponseEnvelope<Vec<Group>>> {
        self.inner.get(&format!("{}/{}", GROUPS, id)).await
    }
}
