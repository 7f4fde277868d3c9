use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::TransportError;
use crate::net::http::mock::MockTransport;
use crate::state::store::MemoryStorage;

fn setup() -> (AuthGateway<MockTransport>, MockTransport, Rc<MemoryStorage>) {
    let backend = Rc::new(MemoryStorage::default());
    let store = SessionStore::new(backend.clone());
    let transport = MockTransport::new();
    let client =
        ApiClient::new(Some("https://api.example.edu".to_owned()), transport.clone(), store);
    (AuthGateway::new(client), transport, backend)
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 7,
        "email": "ada@example.edu",
        "firstname": "Ada",
        "lastname": "Lovelace"
    })
}

fn auth_success_body(token: &str) -> String {
    json!({"data": {"access_token": token, "user_data": user_json()}}).to_string()
}

// =============================================================
// signup / verify / login
// =============================================================

#[test]
fn signup_returns_reg_id_without_token_side_effect() {
    let (gateway, transport, backend) = setup();
    transport.expect("/auth/signup", MockTransport::response(200, r#"{"data":{"reg_id":"reg-42"}}"#));

    let data = SignupRequest {
        email: "ada@example.edu".to_owned(),
        firstname: "Ada".to_owned(),
        lastname: "Lovelace".to_owned(),
        password: "hunter2!".to_owned(),
    };
    let reg_id = block_on(gateway.signup(&data)).expect("signup");
    assert_eq!(reg_id, "reg-42");
    assert!(gateway.store().token().is_none());
    assert!(backend.cookie_value().is_none());
}

#[test]
fn login_persists_token_cookie_and_snapshot() {
    let (gateway, transport, backend) = setup();
    transport.expect("/auth/login", MockTransport::response(200, &auth_success_body("abc")));

    let auth = block_on(gateway.login("ada@example.edu", "pw")).expect("login");
    assert_eq!(auth.access_token, "abc");
    assert_eq!(gateway.store().token().as_deref(), Some("abc"));
    assert_eq!(backend.cookie_value().as_deref(), Some("abc"));
    assert_eq!(gateway.store().cached_user().unwrap().email, "ada@example.edu");
}

#[test]
fn login_sends_email_username_payload() {
    let (gateway, transport, _) = setup();
    transport.expect("/auth/login", MockTransport::response(200, &auth_success_body("t")));
    let _ = block_on(gateway.login("ada", "pw")).expect("login");

    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["email_username"], "ada");
    assert_eq!(body["password"], "pw");
}

#[test]
fn failed_login_leaves_store_untouched() {
    let (gateway, transport, _) = setup();
    transport.expect("/auth/login", MockTransport::response(401, r#"{"message":"bad credentials"}"#));
    let err = block_on(gateway.login("ada", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "bad credentials");
    assert!(gateway.store().token().is_none());
}

#[test]
fn verify_email_persists_like_login() {
    let (gateway, transport, backend) = setup();
    transport.expect("/auth/verify-email", MockTransport::response(200, &auth_success_body("verified-tok")));

    let auth = block_on(gateway.verify_email("123456", "reg-42")).expect("verify");
    assert_eq!(auth.user_data.firstname, "Ada");
    assert_eq!(gateway.store().token().as_deref(), Some("verified-tok"));
    assert_eq!(backend.cookie_value().as_deref(), Some("verified-tok"));

    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["code"], "123456");
    assert_eq!(body["reg_id"], "reg-42");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_everything_and_is_idempotent() {
    let (gateway, transport, backend) = setup();
    transport.expect("/auth/login", MockTransport::response(200, &auth_success_body("tok")));
    let _ = block_on(gateway.login("ada", "pw")).expect("login");

    gateway.logout();
    gateway.logout();

    assert!(gateway.store().token().is_none());
    assert!(gateway.store().cached_user().is_none());
    assert!(backend.cookie_value().is_none());
    // Logout is local-only: the single logged request is the login.
    assert_eq!(transport.request_count(), 1);
}

// =============================================================
// validate / refresh
// =============================================================

#[test]
fn validate_token_sends_candidate_as_bearer() {
    let (gateway, transport, _) = setup();
    transport.expect(
        "/auth/validate-token",
        MockTransport::response(
            200,
            &json!({"data": {"valid": true, "type": "access", "expires_at": 1, "user_data": user_json()}})
                .to_string(),
        ),
    );

    let user = block_on(gateway.validate_token("candidate")).expect("validate").expect("user");
    assert_eq!(user.id, 7);
    assert_eq!(transport.requests()[0].header("Authorization"), Some("Bearer candidate"));
    // Fresh data refreshes the cached snapshot.
    assert_eq!(gateway.store().cached_user().unwrap().id, 7);
}

#[test]
fn explicitly_invalid_token_is_absent_not_an_error() {
    let (gateway, transport, _) = setup();
    transport.expect(
        "/auth/validate-token",
        MockTransport::response(200, r#"{"data":{"valid":false}}"#),
    );
    let outcome = block_on(gateway.validate_token("expired")).expect("no exception");
    assert!(outcome.is_none());
}

#[test]
fn unauthorized_validate_is_absent_not_an_error() {
    let (gateway, transport, _) = setup();
    transport.expect("/auth/validate-token", MockTransport::response(401, "{}"));
    let outcome = block_on(gateway.validate_token("expired")).expect("no exception");
    assert!(outcome.is_none());
}

#[test]
fn validate_transport_failure_propagates() {
    let (gateway, transport, _) = setup();
    transport.expect("/auth/validate-token", Err(TransportError::Network("down".to_owned())));
    let err = block_on(gateway.validate_token("tok")).unwrap_err();
    assert_eq!(err.status(), 0);
}

#[test]
fn refresh_access_token_persists_both_representations() {
    let (gateway, transport, backend) = setup();
    gateway.store().persist_token("old");
    transport.expect(
        "/auth/refresh-token",
        MockTransport::response(200, &json!({"data":{"access_token":"new"}}).to_string()),
    );

    let token = block_on(gateway.refresh_access_token()).expect("refresh");
    assert_eq!(token, "new");
    assert_eq!(gateway.store().token().as_deref(), Some("new"));
    assert_eq!(backend.cookie_value().as_deref(), Some("new"));
}

// =============================================================
// availability checks
// =============================================================

#[test]
fn email_availability_is_a_pure_read() {
    let (gateway, transport, _) = setup();
    transport.expect(
        "/auth/check-email",
        MockTransport::response(200, r#"{"data":{"available":true,"email":"ada@example.edu"}}"#),
    );
    let data = block_on(gateway.check_email_availability("ada@example.edu")).expect("check");
    assert!(data.available);
    assert_eq!(data.email, "ada@example.edu");
    assert!(gateway.store().token().is_none());
}

#[test]
fn username_availability_reports_taken() {
    let (gateway, transport, _) = setup();
    transport.expect(
        "/auth/check-username",
        MockTransport::response(200, r#"{"data":{"available":false,"username":"ada"}}"#),
    );
    let data = block_on(gateway.check_username_availability("ada")).expect("check");
    assert!(!data.available);
}

#[test]
fn resend_code_posts_reg_id() {
    let (gateway, transport, _) = setup();
    transport.expect(
        "/auth/resend-code",
        MockTransport::response(200, r#"{"message":"sent","status":"success","status_code":200}"#),
    );
    block_on(gateway.resend_code("reg-42")).expect("resend");
    let body: serde_json::Value =
        serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["reg_id"], "reg-42");
}
