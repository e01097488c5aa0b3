//! Roles service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{ResponseEnvelope, Role};
use crate::Result;

const ROLES: &str = "/api/1/roles";

/// Service for role operations.
pub struct RolesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing roles.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RolesQuery {
    /// Filter by exact role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RolesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List roles.
    pub async fn list(&self, query: Option<RolesQuery>) -> Result<ResponseEnvelope<Vec<Role>>> {
        match query {
            Some(q) => self.inner.get_with_query(ROLES, &q).await,
            None => self.inner.get(ROLES).await,
        }
    }

    /// Get a single role by ID.
    pub async fn get(&self, id: i64) -> Result<ResponseEnvelope<Vec<Role>>> {
        self.inner.get(&format!("{}/{}", ROLES, id)).await
    }
}
