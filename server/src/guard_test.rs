use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::any;
use tower::ServiceExt;

use super::*;

/// Guard in front of a catch-all handler, mirroring its position in the
/// real router.
fn guarded_app() -> Router {
    Router::new()
        .route("/", any(ok))
        .route("/{*rest}", any(ok))
        .layer(axum::middleware::from_fn(route_guard))
}

async fn ok() -> StatusCode {
    StatusCode::OK
}

fn request(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = cookie {
        builder = builder.header(header::COOKIE, format!("{COOKIE_NAME}={token}"));
    }
    builder.body(Body::empty()).expect("request")
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn public_paths_pass_without_cookie() {
    let app = guarded_app();
    let public =
        ["/", "/events", "/events/ev-42", "/login", "/about", "/contact", "/gallery", "/sitemap"];
    for path in public {
        let response = app.clone().oneshot(request(path, None)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK, "expected {path} to pass");
    }
}

#[tokio::test]
async fn protected_path_without_cookie_redirects_to_login() {
    let app = guarded_app();
    let response = app.oneshot(request("/dashboard", None)).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?from=/dashboard");
}

#[tokio::test]
async fn redirect_preserves_the_query_string() {
    let app = guarded_app();
    let response =
        app.oneshot(request("/dashboard?tab=upcoming", None)).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login?from=/dashboard%3Ftab%3Dupcoming");
}

#[tokio::test]
async fn protected_path_with_cookie_passes() {
    let app = guarded_app();
    let response =
        app.oneshot(request("/dashboard", Some("tok-123"))).await.expect("response");

    // Presence is enough at the edge; validity is judged client-side.
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_cookie_counts_as_absent() {
    let app = guarded_app();
    let response = app.oneshot(request("/dashboard", Some(""))).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn auth_page_with_cookie_redirects_home() {
    let app = guarded_app();
    for path in ["/login", "/signup", "/verify-email"] {
        let response =
            app.clone().oneshot(request(path, Some("tok-123"))).await.expect("response");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "expected {path} to bounce");
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn nested_unknown_paths_are_protected_by_default() {
    let app = guarded_app();
    let response =
        app.oneshot(request("/admin/reports", None)).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn assets_and_health_bypass_the_guard() {
    let app = guarded_app();
    for path in ["/pkg/client.wasm", "/favicon.ico", "/healthz", "/images/hero.jpg"] {
        let response = app.clone().oneshot(request(path, None)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK, "expected {path} to bypass");
    }
}

#[tokio::test]
async fn trailing_slash_does_not_change_the_verdict() {
    let app = guarded_app();
    let response = app.oneshot(request("/events/", None)).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
