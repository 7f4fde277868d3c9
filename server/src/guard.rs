//! Edge route guard.
//!
//! First line of authentication enforcement: before any SSR work, requests
//! for protected paths without the session cookie are redirected to the
//! login page with a `from` target, and requests for auth pages that do
//! carry a cookie are sent home. The client guard repeats the judgement
//! after hydration with the validated session; both sides call the same
//! classifier in `client::routes`, so they cannot drift apart.
//!
//! The cookie's presence is all that is checked here. Validity is the
//! client's problem: a stale cookie gets through the edge, fails
//! validation during hydration, and the client guard redirects then.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use client::routes::{HOME_PATH, is_auth_path, is_public_path, login_redirect};
use client::state::store::COOKIE_NAME;

pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    if is_asset_path(&path) {
        return next.run(request).await;
    }

    let has_cookie = jar.get(COOKIE_NAME).is_some_and(|c| !c.value().is_empty());

    if !has_cookie && !is_public_path(&path) {
        let target = path_with_query(&request);
        tracing::debug!(%path, "redirecting unauthenticated request to login");
        return Redirect::temporary(&login_redirect(&target)).into_response();
    }
    if has_cookie && is_auth_path(&path) {
        return Redirect::temporary(HOME_PATH).into_response();
    }

    next.run(request).await
}

/// The original path plus query string, preserved so login can send the
/// user back exactly where they were headed.
fn path_with_query(request: &Request) -> String {
    request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned())
}

/// Static assets and the health probe bypass classification entirely.
fn is_asset_path(path: &str) -> bool {
    if path.starts_with("/pkg/") || path == "/favicon.ico" || path == "/healthz" {
        return true;
    }
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}
