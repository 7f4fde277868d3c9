//! Site header with session-aware navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::routes::HOME_PATH;
use crate::state::session::Session;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();
    let go_home = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        if go_home.get() {
            go_home.set(false);
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let display_name = move || {
        session.get().user.map(|u| u.display_name()).unwrap_or_default()
    };

    let on_logout = move |_| {
        controller.with_value(|c| c.logout());
        go_home.set(true);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"EventSphere"</a>
            <nav class="site-header__nav">
                <a href="/events">"Events"</a>
                <a href="/gallery">"Gallery"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <nav class="site-header__auth">
                            <a href="/login">"Log In"</a>
                            <a class="btn btn--primary" href="/signup">"Sign Up"</a>
                        </nav>
                    }
                }
            >
                <nav class="site-header__auth">
                    <a href="/dashboard">"My Events"</a>
                    <a href="/account">{display_name}</a>
                    <button class="btn site-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
