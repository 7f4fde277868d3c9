use super::*;

// =============================================================
// Public path classification
// =============================================================

#[test]
fn root_is_public() {
    assert!(is_public_path("/"));
    assert!(is_public_path(""));
}

#[test]
fn marketing_pages_are_public() {
    for path in ["/about", "/contact", "/gallery", "/events", "/sitemap"] {
        assert!(is_public_path(path), "expected {path} public");
    }
}

#[test]
fn auth_pages_are_public() {
    for path in ["/login", "/signup", "/verify-email"] {
        assert!(is_public_path(path), "expected {path} public");
    }
}

#[test]
fn trailing_slash_tolerated() {
    assert!(is_public_path("/events/"));
    assert!(is_public_path("/login/"));
    assert!(is_auth_path("/login/"));
}

#[test]
fn event_detail_is_public() {
    assert!(is_public_path("/events/550e8400-e29b-41d4-a716-446655440000"));
    assert!(is_public_path("/events/abc123/"));
}

#[test]
fn nested_event_paths_are_not_public() {
    assert!(!is_public_path("/events/abc/register"));
    assert!(!is_public_path("/events//"));
}

#[test]
fn protected_pages_are_not_public() {
    for path in ["/dashboard", "/account", "/admin", "/certificates"] {
        assert!(!is_public_path(path), "expected {path} protected");
    }
}

#[test]
fn auth_path_excludes_other_pages() {
    assert!(!is_auth_path("/"));
    assert!(!is_auth_path("/events"));
    assert!(!is_auth_path("/dashboard"));
    assert!(!is_auth_path("/login/extra"));
}

// =============================================================
// Redirect building
// =============================================================

#[test]
fn login_redirect_carries_origin() {
    assert_eq!(login_redirect("/dashboard"), "/login?from=/dashboard");
}

#[test]
fn client_login_redirect_carries_notice_flag() {
    assert_eq!(
        client_login_redirect("/dashboard"),
        "/login?redirect=true&from=/dashboard"
    );
}

#[test]
fn encode_query_escapes_reserved_characters() {
    assert_eq!(encode_query("/a b?c=d&e"), "/a%20b%3Fc%3Dd%26e");
    assert_eq!(encode_query("/events/42"), "/events/42");
}
