//! Signup page with live email-availability feedback.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::net::availability::{CancelToken, debounced_email_check};
use crate::net::types::{EmailAvailability, SignupRequest};
use crate::state::session::Session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();

    let email = RwSignal::new(String::new());
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let availability = RwSignal::new(None::<EmailAvailability>);
    let redirect = RwSignal::new(None::<String>);

    // Token for the in-flight availability check. Each keystroke cancels the
    // previous check before starting its own, and leaving the page cancels
    // whatever is still pending.
    let pending_check: StoredValue<Option<CancelToken>, LocalStorage> =
        StoredValue::new_local(None);
    on_cleanup(move || {
        if let Some(token) = pending_check.try_get_value().flatten() {
            token.cancel();
        }
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_email_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        email.set(value.clone());
        availability.set(None);

        if let Some(previous) = pending_check.get_value() {
            previous.cancel();
        }
        if !value.contains('@') {
            pending_check.set_value(None);
            return;
        }

        let token = CancelToken::new();
        pending_check.set_value(Some(token.clone()));
        let gateway = controller.with_value(|c| c.gateway().clone());
        leptos::task::spawn_local(async move {
            if let Some(result) = debounced_email_check(&gateway, value, token).await {
                availability.set(Some(result));
            }
        });
    };

    let email_taken = move || availability.get().is_some_and(|a| !a.available);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || email_taken() {
            return;
        }
        let data = SignupRequest {
            email: email.get().trim().to_owned(),
            firstname: firstname.get().trim().to_owned(),
            lastname: lastname.get().trim().to_owned(),
            password: password.get(),
        };
        if data.email.is_empty() || data.firstname.is_empty() || data.password.is_empty() {
            return;
        }
        busy.set(true);
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            if let Ok(reg_id) = controller.signup(&data).await {
                redirect.set(Some(format!("/verify-email?reg_id={reg_id}")));
            }
            busy.set(false);
        });
    };

    view! {
        <Header/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-card__error">
                        {move || session.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            class:auth-form__input--invalid=email_taken
                            type="email"
                            prop:value=move || email.get()
                            on:input=on_email_input
                        />
                        <Show when=move || availability.get().is_some()>
                            <span class="auth-form__hint">
                                {move || {
                                    availability
                                        .get()
                                        .map(|a| {
                                            if a.available {
                                                "Email is available".to_owned()
                                            } else {
                                                "An account with this email already exists".to_owned()
                                            }
                                        })
                                        .unwrap_or_default()
                                }}
                            </span>
                        </Show>
                    </label>
                    <label class="auth-form__label">
                        "First Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || firstname.get()
                            on:input=move |ev| firstname.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Last Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || lastname.get()
                            on:input=move |ev| lastname.set(event_target_value(&ev))
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
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </main>
    }
}
