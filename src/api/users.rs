//! Users service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{ResponseEnvelope, Role, User, UserApp, UserId};
use crate::Result;

const USERS: &str = "/api/1/users";

/// Service for user operations.
///
/// # Example
///
/// ```no_run
/// use onelogin_rs::api::UsersQuery;
///
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// let query = UsersQuery {
///     email: Some("xavier@example.com".into()),
///     ..Default::default()
/// };
///
/// let users = client.users().list(Some(query)).await?.ensure_success()?;
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing users.
///
/// Unset fields are left out of the query string.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UsersQuery {
    /// Filter by directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<i64>,
    /// Filter by email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Filter by external ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Filter by first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Filter by last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Filter by user ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Filter by manager's AD ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_ad_id: Option<String>,
    /// Filter by role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// Filter by sAMAccountName
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samaccountname: Option<String>,
    /// Filter by username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Filter by user principal name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userprincipalname: Option<String>,
    /// Only users created at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    /// Only users created at or before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    /// Comma-separated list of fields to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Sort field, prefix with `-` for descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List users, up to 50 per page.
    pub async fn list(&self, query: Option<UsersQuery>) -> Result<ResponseEnvelope<Vec<User>>> {
        match query {
            Some(q) => self.inner.get_with_query(USERS, &q).await,
            None => self.inner.get(USERS).await,
        }
    }

    /// Get a single user.
    pub async fn get(&self, user_id: UserId) -> Result<ResponseEnvelope<Vec<User>>> {
        self.inner.get(&format!("{}/{}", USERS, user_id)).await
    }

    /// Apps assigned to a user.
    pub async fn apps(&self, user_id: UserId) -> Result<ResponseEnvelope<Vec<UserApp>>> {
        self.inner.get(&format!("{}/{}/apps", USERS, user_id)).await
    }

    /// Roles assigned to a user.
    ///
    /// The API returns the role IDs as a nested array.
    pub async fn roles(&self, user_id: UserId) -> Result<ResponseEnvelope<Vec<Vec<i64>>>> {
        self.inner.get(&format!("{}/{}/roles", USERS, user_id)).await
    }

    /// Roles assigned to a user, resolved to [`Role`] records.
    ///
    /// Issues one extra request per role ID.
    pub async fn role_details(&self, user_id: UserId) -> Result<Vec<Role>> {
        let ids: Vec<i64> = self
            .roles(user_id)
            .await?
            .ensure_success()?
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();

        let mut roles = Vec::with_capacity(ids.len());
        for id in ids {
            let found: Option<Vec<Role>> =
                self.inner.get_data(&format!("/api/1/roles/{}", id)).await?;
            roles.extend(found.unwrap_or_default());
        }
        Ok(roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_unset_fields() {
        let query = UsersQuery {
            email: Some("a@example.com".into()),
            limit: Some(10),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({ "email": "a@example.com", "limit": 10 })
        );
    }
}
