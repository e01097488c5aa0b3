//! Events service for the account event log.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{EmptyResponse, Event, EventType, NewEvent, ResponseEnvelope};
use crate::Result;

const EVENTS: &str = "/api/1/events";

/// Service for event log operations.
///
/// # Example
///
/// ```no_run
/// use onelogin_rs::api::EventsQuery;
///
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// let query = EventsQuery {
///     event_type_id: Some(13),
///     ..Default::default()
/// };
///
/// let events = client.events().list(Some(query)).await?.ensure_success()?;
/// # Ok(())
/// # }
/// ```
pub struct EventsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing events.
///
/// Unset fields are left out of the query string rather than sent as
/// empty or `null` values.
#[derive(Debug, Default, Clone, Serialize)]
pub struct EventsQuery {
    /// Client ID of the token that triggered the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Exact creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Filter by directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_id: Option<String>,
    /// Filter by event type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<i64>,
    /// Filter by event ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Filter by resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Only events at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    /// Only events at or before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    /// Filter by the user acted upon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// All event types known to the Events API.
    pub async fn types(&self) -> Result<ResponseEnvelope<Vec<EventType>>> {
        self.inner.get(&format!("{}/types", EVENTS)).await
    }

    /// List events, newest first.
    pub async fn list(&self, query: Option<EventsQuery>) -> Result<ResponseEnvelope<Vec<Event>>> {
        match query {
            Some(q) => self.inner.get_with_query(EVENTS, &q).await,
            None => self.inner.get(EVENTS).await,
        }
    }

    /// Get a single event by ID.
    pub async fn get(&self, id: i64) -> Result<ResponseEnvelope<Vec<Event>>> {
        self.inner.get(&format!("{}/{}", EVENTS, id)).await
    }

    /// Record an event in the account's event log.
    pub async fn create(&self, event: &NewEvent) -> Result<EmptyResponse> {
        self.inner.post(EVENTS, event).await
    }
}
