//! Login page.
//!
//! Reads two query parameters: `from` (path to return to after a successful
//! login) and `redirect` (set by the client guard, shows a one-time notice
//! explaining why the user landed here).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::routes::HOME_PATH;
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();
    let query = use_query_map();

    let email_username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);

    let guard_notice = move || query.get().get("redirect").as_deref() == Some("true");
    let return_target = move || {
        query
            .get_untracked()
            .get("from")
            .filter(|f| f.starts_with('/'))
            .unwrap_or_else(|| HOME_PATH.to_owned())
    };

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    // Already signed in: an auth page has nothing to offer, go to the
    // requested target.
    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && state.user.is_some() && !busy.get() {
            redirect.set(Some(return_target()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let identity = email_username.get().trim().to_owned();
        let secret = password.get();
        if identity.is_empty() || secret.is_empty() {
            return;
        }
        busy.set(true);
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            if controller.login(&identity, &secret).await.is_ok() {
                redirect.set(Some(return_target()));
            }
            busy.set(false);
        });
    };

    view! {
        <Header/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Log In"</h1>
                <Show when=guard_notice>
                    <p class="auth-card__notice">"Please log in to continue."</p>
                </Show>
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-card__error">
                        {move || session.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email or Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || email_username.get()
                            on:input=move |ev| email_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </main>
    }
}
