use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::net::http::mock::MockTransport;
use crate::state::store::{MemoryStorage, SessionStore};

fn setup() -> (ApiClient<MockTransport>, MockTransport) {
    let backend = Rc::new(MemoryStorage::default());
    let store = SessionStore::new(backend);
    let transport = MockTransport::new();
    let client =
        ApiClient::new(Some("https://api.example.edu".to_owned()), transport.clone(), store);
    (client, transport)
}

fn event_json(id: &str) -> serde_json::Value {
    json!({ "id": id, "title": "Tech Fest", "capacity": 100, "available_slots": 40 })
}

// =============================================================
// Query string building
// =============================================================

#[test]
fn empty_query_renders_nothing() {
    assert_eq!(EventQuery::default().to_query_string(), "");
}

#[test]
fn query_joins_set_fields_in_order() {
    let query = EventQuery {
        page: Some(2),
        per_page: Some(12),
        search: Some("tech fest".to_owned()),
        status: Some("ongoing".to_owned()),
        ..EventQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "?page=2&per_page=12&search=tech%20fest&status=ongoing"
    );
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn list_events_hits_events_endpoint() {
    let (client, transport) = setup();
    transport.expect(
        "/api/v1/events?page=1",
        MockTransport::response(
            200,
            &json!({"data":{"events":[event_json("e1")],"total":1,"page":1,"per_page":12,"total_pages":1}})
                .to_string(),
        ),
    );
    let page = block_on(list_events(
        &client,
        &EventQuery { page: Some(1), ..EventQuery::default() },
    ))
    .expect("list");
    assert_eq!(page.events.len(), 1);
    assert_eq!(page.events[0].id, "e1");
}

#[test]
fn featured_events_requests_first_six() {
    let (client, transport) = setup();
    transport.expect(
        "/api/v1/events?page=1&per_page=6",
        MockTransport::response(200, &json!({"data":{"events":[]}}).to_string()),
    );
    let page = block_on(featured_events(&client)).expect("featured");
    assert!(page.events.is_empty());
}

#[test]
fn get_event_unwraps_envelope() {
    let (client, transport) = setup();
    transport.expect(
        "/api/v1/events/e9",
        MockTransport::response(200, &json!({"data": event_json("e9")}).to_string()),
    );
    let event = block_on(get_event(&client, "e9")).expect("event");
    assert_eq!(event.id, "e9");
    assert_eq!(event.available_slots, 40);
}

#[test]
fn register_posts_with_bearer_from_store() {
    let (client, transport) = setup();
    client.store().persist_token("tok");
    transport.expect(
        "/api/v1/events/e9/register",
        MockTransport::response(
            200,
            &json!({"data":{"registration_id":"r1","status":"confirmed","message":"ok"}}).to_string(),
        ),
    );
    let confirmation = block_on(register_for_event(&client, "e9")).expect("register");
    assert_eq!(confirmation.status, "confirmed");
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("Authorization"), Some("Bearer tok"));
}

#[test]
fn cancel_uses_delete() {
    let (client, transport) = setup();
    transport.expect(
        "/api/v1/events/e9/register",
        MockTransport::response(200, &json!({"data":{"message":"cancelled"}}).to_string()),
    );
    block_on(cancel_registration(&client, "e9")).expect("cancel");
    assert_eq!(transport.requests()[0].method, Method::Delete);
}

#[test]
fn user_registrations_paginates() {
    let (client, transport) = setup();
    transport.expect(
        "/api/v1/user/registrations?page=2&per_page=20",
        MockTransport::response(
            200,
            &json!({"data":{"registrations":[{
                "id":"r1","event_id":"e1","user_id":"u1","status":"confirmed",
                "registered_at":"2026-01-01","event": event_json("e1")
            }],"total":21,"page":2,"per_page":20}})
            .to_string(),
        ),
    );
    let page = block_on(user_registrations(&client, 2, 20)).expect("registrations");
    assert_eq!(page.registrations[0].event.id, "e1");
    assert_eq!(page.total, 21);
}
