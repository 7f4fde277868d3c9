//! Canonical route classification shared by the edge guard and the client
//! layout guard.
//!
//! DESIGN
//! ======
//! Both enforcement points MUST agree on what counts as a public path, so
//! the rule set lives here and nowhere else. The server crate imports these
//! functions through the `ssr` feature; the client guard calls them after
//! hydration.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login page, the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";

/// Home path, the redirect target for authenticated users on auth pages.
pub const HOME_PATH: &str = "/";

fn normalize(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `path` is one of the auth-only pages (login, signup, verify).
/// Authenticated users are redirected away from these.
pub fn is_auth_path(path: &str) -> bool {
    matches!(normalize(path), "/login" | "/signup" | "/verify-email")
}

/// Whether `path` is servable without an authenticated session.
///
/// Trailing slashes are tolerated. Event detail pages (`/events/{id}`) are
/// public because the backend serves individual events without credentials.
pub fn is_public_path(path: &str) -> bool {
    let path = normalize(path);
    if matches!(path, "/" | "/about" | "/contact" | "/gallery" | "/events" | "/sitemap") {
        return true;
    }
    if is_auth_path(path) {
        return true;
    }
    if let Some(rest) = path.strip_prefix("/events/") {
        return !rest.is_empty() && !rest.contains('/');
    }
    false
}

/// Percent-encode a value for use in a query string. Keeps `/` readable
/// since redirect targets are always same-origin paths.
pub fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// Build the edge-guard redirect for an unauthenticated request.
pub fn login_redirect(from: &str) -> String {
    format!("{LOGIN_PATH}?from={}", encode_query(from))
}

/// Build the client-guard redirect, which also carries the `redirect` flag
/// that triggers the one-time "please log in" notice.
pub fn client_login_redirect(from: &str) -> String {
    format!("{LOGIN_PATH}?redirect=true&from={}", encode_query(from))
}
