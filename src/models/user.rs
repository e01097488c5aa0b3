//! User models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A OneLogin user.
///
/// Most fields are optional: the API omits or nulls whatever the account
/// has not populated, and the `fields` query parameter can trim the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Given name
    #[serde(default)]
    pub firstname: Option<String>,
    /// Family name
    #[serde(default)]
    pub lastname: Option<String>,
    /// Account status code (0 unactivated, 1 active, 2 suspended, 3 locked, ...)
    #[serde(default)]
    pub status: Option<i32>,
    /// Account state code (0 unapproved, 1 approved, 2 rejected, 3 unlicensed)
    #[serde(default)]
    pub state: Option<i32>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Company
    #[serde(default)]
    pub company: Option<String>,
    /// Department
    #[serde(default)]
    pub department: Option<String>,
    /// Job title
    #[serde(default)]
    pub title: Option<String>,
    /// Group membership
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Assigned role IDs
    #[serde(default)]
    pub role_id: Option<Vec<i64>>,
    /// Directory the user was synced from
    #[serde(default)]
    pub directory_id: Option<i64>,
    /// Distinguished name in the source directory
    #[serde(default)]
    pub distinguished_name: Option<String>,
    /// External ID
    #[serde(default)]
    pub external_id: Option<String>,
    /// Manager's Active Directory ID
    #[serde(default)]
    pub manager_ad_id: Option<String>,
    /// sAMAccountName from Active Directory
    #[serde(default)]
    pub samaccountname: Option<String>,
    /// User principal name
    #[serde(default)]
    pub userprincipalname: Option<String>,
    /// Member-of string from the directory
    #[serde(default)]
    pub member_of: Option<String>,
    /// Preferred locale code
    #[serde(default)]
    pub locale_code: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Open ID name
    #[serde(default)]
    pub openid_name: Option<String>,
    /// Invalid login attempt counter
    #[serde(default)]
    pub invalid_login_attempts: Option<i32>,
    /// When the user was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the user was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the user was activated
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
    /// Last login time
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Last password change
    #[serde(default)]
    pub password_changed_at: Option<DateTime<Utc>>,
    /// Lock expiry
    #[serde(default)]
    pub locked_until: Option<DateTime<Utc>>,
    /// When the invitation was sent
    #[serde(default)]
    pub invitation_sent_at: Option<DateTime<Utc>>,
    /// Custom attribute values keyed by shortname
    #[serde(default)]
    pub custom_attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

/// An app assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserApp {
    /// App ID
    pub id: i64,
    /// App name
    pub name: String,
    /// Icon URL
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the app is shown in the user's portal
    #[serde(default)]
    pub extension: Option<bool>,
    /// Login ID of the app for this user
    #[serde(default)]
    pub login_id: Option<i64>,
    /// Whether the app is provisioned
    #[serde(default)]
    pub provisioned: Option<i32>,
    /// Whether provisioning is enabled for the app
    #[serde(default)]
    pub provisioning_enabled: Option<bool>,
}
