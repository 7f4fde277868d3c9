//! # client
//!
//! Leptos + WASM front-end for EventSphere, a campus events application.
//! Talks to an external REST backend for auth, events, and registrations.
//!
//! The interesting part lives in `net/` and `state/`: bearer-token
//! persistence, a request wrapper with silent refresh-on-401, the session
//! lifecycle controller, and the canonical public-path classifier shared
//! with the server's edge guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
