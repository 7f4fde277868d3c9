//! Client-side layout guard for authenticated routes.
//!
//! DESIGN
//! ======
//! The edge guard already turned away cookie-less requests before this code
//! ran, so in the common case the session hydrates from the cached snapshot
//! and the children render immediately. This guard covers the rest: it waits
//! for hydration to finish before judging, then redirects to the login page
//! with the `redirect` flag and a `from` target so login can round-trip the
//! user back. Classification goes through the same predicate the edge uses.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::fullscreen_loader::FullscreenLoader;
use crate::routes::{client_login_redirect, is_public_path};
use crate::state::session::Session;

/// Renders its children only for an authenticated session.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();

    // Redirect once hydration has settled and no user emerged. Never fires
    // while is_loading holds, so a slow validation cannot bounce a user who
    // is about to be confirmed.
    Effect::new(move || {
        let state = session.get();
        if state.is_loading || state.user.is_some() {
            return;
        }
        let path = location.pathname.get();
        // Same classifier as the edge guard; a public path never redirects,
        // even if this component ends up wrapping one.
        if is_public_path(&path) {
            return;
        }
        let search = location.search.get();
        let from = if search.is_empty() { path } else { format!("{path}?{search}") };
        navigate(&client_login_redirect(&from), NavigateOptions::default());
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || view! { <FullscreenLoader/> }
        >
            {children()}
        </Show>
    }
}
