//! Full-viewport loading indicator shown while the session hydrates.

use leptos::prelude::*;

#[component]
pub fn FullscreenLoader() -> impl IntoView {
    view! {
        <div class="fullscreen-loader" aria-busy="true">
            <div class="fullscreen-loader__spinner" aria-hidden="true"></div>
            <p class="fullscreen-loader__label">"Loading..."</p>
        </div>
    }
}
