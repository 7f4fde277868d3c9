//! Event and registration API operations.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::{
    ApiEnvelope, CategoryList, Event, EventCategory, EventPage, EventRegistration,
    RegistrationConfirmation, RegistrationDetails, RegistrationPage,
};

/// Query parameters for the paginated event list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl EventQuery {
    /// Render as a `?`-prefixed query string, or empty when no filters set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(format!("per_page={per_page}"));
        }
        if let Some(category_id) = &self.category_id {
            pairs.push(format!("category_id={}", crate::routes::encode_query(category_id)));
        }
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", crate::routes::encode_query(search)));
        }
        if let Some(status) = &self.status {
            pairs.push(format!("status={}", crate::routes::encode_query(status)));
        }
        if let Some(date_from) = &self.date_from {
            pairs.push(format!("date_from={date_from}"));
        }
        if let Some(date_to) = &self.date_to {
            pairs.push(format!("date_to={date_to}"));
        }
        if pairs.is_empty() { String::new() } else { format!("?{}", pairs.join("&")) }
    }
}

/// Paginated list of public events.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn list_events<T: HttpTransport>(
    client: &ApiClient<T>,
    query: &EventQuery,
) -> Result<EventPage, ApiError> {
    let endpoint = format!("/api/v1/events{}", query.to_query_string());
    let envelope: ApiEnvelope<EventPage> = client.get(&endpoint).await?;
    Ok(envelope.data)
}

/// First six events, for the home page carousel.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn featured_events<T: HttpTransport>(client: &ApiClient<T>) -> Result<EventPage, ApiError> {
    let query = EventQuery { page: Some(1), per_page: Some(6), ..EventQuery::default() };
    list_events(client, &query).await
}

/// Full detail for one event.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_event<T: HttpTransport>(
    client: &ApiClient<T>,
    event_id: &str,
) -> Result<Event, ApiError> {
    let envelope: ApiEnvelope<Event> = client.get(&format!("/api/v1/events/{event_id}")).await?;
    Ok(envelope.data)
}

/// All event categories.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn list_categories<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<Vec<EventCategory>, ApiError> {
    let envelope: ApiEnvelope<CategoryList> = client.get("/api/v1/events/categories").await?;
    Ok(envelope.data.categories)
}

/// Register the current user for an event. Requires a session.
///
/// # Errors
///
/// Propagates [`ApiError`]; a 401 goes through the silent refresh path.
pub async fn register_for_event<T: HttpTransport>(
    client: &ApiClient<T>,
    event_id: &str,
) -> Result<RegistrationConfirmation, ApiError> {
    let envelope: ApiEnvelope<RegistrationConfirmation> =
        client.post(&format!("/api/v1/events/{event_id}/register"), None, &[]).await?;
    Ok(envelope.data)
}

/// Cancel the current user's registration for an event.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn cancel_registration<T: HttpTransport>(
    client: &ApiClient<T>,
    event_id: &str,
) -> Result<(), ApiError> {
    let _: ApiEnvelope<serde_json::Value> =
        client.delete(&format!("/api/v1/events/{event_id}/register")).await?;
    Ok(())
}

/// The current user's registrations, paginated.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn user_registrations<T: HttpTransport>(
    client: &ApiClient<T>,
    page: u32,
    per_page: u32,
) -> Result<RegistrationPage, ApiError> {
    let endpoint = format!("/api/v1/user/registrations?page={page}&per_page={per_page}");
    let envelope: ApiEnvelope<RegistrationPage> = client.get(&endpoint).await?;
    Ok(envelope.data)
}

/// The current user's registration details for one event.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn registration_details<T: HttpTransport>(
    client: &ApiClient<T>,
    event_id: &str,
) -> Result<EventRegistration, ApiError> {
    let envelope: ApiEnvelope<RegistrationDetails> =
        client.get(&format!("/api/v1/events/{event_id}/registration")).await?;
    Ok(envelope.data.registration)
}
