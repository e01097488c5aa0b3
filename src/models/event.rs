//! Event log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event recorded in the OneLogin event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID
    pub id: i64,
    /// When the event was recorded
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Account the event belongs to
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Type of the event, see [`EventType`]
    #[serde(default)]
    pub event_type_id: Option<i64>,
    /// User acted upon
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Name of the user acted upon
    #[serde(default)]
    pub user_name: Option<String>,
    /// User who performed the action
    #[serde(default)]
    pub actor_user_id: Option<i64>,
    /// Name of the user who performed the action
    #[serde(default)]
    pub actor_user_name: Option<String>,
    /// System that performed the action
    #[serde(default)]
    pub actor_system: Option<String>,
    /// Client ID of the token that triggered the event
    #[serde(default)]
    pub client_id: Option<String>,
    /// App involved
    #[serde(default)]
    pub app_id: Option<i64>,
    /// Name of the app involved
    #[serde(default)]
    pub app_name: Option<String>,
    /// Group involved
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Name of the group involved
    #[serde(default)]
    pub group_name: Option<String>,
    /// Role involved
    #[serde(default)]
    pub role_id: Option<i64>,
    /// Name of the role involved
    #[serde(default)]
    pub role_name: Option<String>,
    /// Directory involved
    #[serde(default)]
    pub directory_id: Option<i64>,
    /// Source IP address
    #[serde(default)]
    pub ipaddr: Option<String>,
    /// Resolution of the event
    #[serde(default)]
    pub resolution: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Custom message attached when the event was created
    #[serde(default)]
    pub custom_message: Option<String>,
    /// Error details, if the event records a failure
    #[serde(default)]
    pub error_description: Option<String>,
}

/// An event type known to the Events API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Type ID
    pub id: i64,
    /// Type name, e.g. `"USER_LOGGED_INTO_ONELOGIN"`
    pub name: String,
    /// Description template
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for creating an event.
///
/// Only `event_type_id` and `account_id` are required by the API; every
/// `None` field is left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Type of the event
    pub event_type_id: i64,
    /// Account to record the event in
    pub account_id: i64,
    /// System performing the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_system: Option<String>,
    /// User performing the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_user_id: Option<i64>,
    /// Name of the user performing the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_user_name: Option<String>,
    /// App involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i64>,
    /// Custom message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    /// Group involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    /// Source IP address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddr: Option<String>,
    /// Role involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    /// User acted upon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Name of the user acted upon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl NewEvent {
    /// Create a request with only the required fields set.
    pub fn new(event_type_id: i64, account_id: i64) -> Self {
        Self {
            event_type_id,
            account_id,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_event_omits_unset_fields() {
        let event = NewEvent {
            custom_message: Some("deployed".into()),
            ..NewEvent::new(13, 555)
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event_type_id": 13,
                "account_id": 555,
                "custom_message": "deployed"
            })
        );
    }

    #[test]
    fn test_event_decode() {
        let event: Event = serde_json::from_value(json!({
            "id": 999999999,
            "created_at": "2014-12-19T02:02:39.276Z",
            "account_id": 55555,
            "user_id": 88888888,
            "event_type_id": 13,
            "notes": null,
            "ipaddr": "11.111.11.111",
            "actor_user_id": 7777777,
            "app_id": null,
            "group_id": null,
            "role_id": null,
            "actor_system": "",
            "custom_message": null,
            "role_name": null,
            "app_name": null,
            "group_name": null,
            "actor_user_name": "Xavier Wong",
            "user_name": "Xavier Wong",
            "resolution": null,
            "directory_id": null,
            "otp_device_name": null
        }))
        .unwrap();

        assert_eq!(event.id, 999999999);
        assert_eq!(event.event_type_id, Some(13));
        assert_eq!(event.actor_user_name.as_deref(), Some("Xavier Wong"));
        assert!(event.created_at.is_some());
    }
}
