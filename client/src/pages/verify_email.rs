//! Email verification page, reached from signup with `?reg_id=...`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::state::session::Session;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();
    let query = use_query_map();

    let code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());
    let redirect = RwSignal::new(None::<String>);

    let reg_id = move || query.get_untracked().get("reg_id").unwrap_or_default();

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = code.get().trim().to_owned();
        let reg_id_value = reg_id();
        if code_value.is_empty() || reg_id_value.is_empty() {
            notice.set("Enter the code from your email.".to_owned());
            return;
        }
        busy.set(true);
        notice.set(String::new());
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            if controller.verify_email(&code_value, &reg_id_value).await.is_ok() {
                redirect.set(Some("/dashboard".to_owned()));
            }
            busy.set(false);
        });
    };

    let on_resend = move |_| {
        let reg_id_value = reg_id();
        if reg_id_value.is_empty() {
            return;
        }
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            match controller.gateway().resend_code(&reg_id_value).await {
                Ok(()) => notice.set("A new code is on its way.".to_owned()),
                Err(e) => notice.set(format!("Could not resend the code: {e}")),
            }
        });
    };

    view! {
        <Header/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Verify Your Email"</h1>
                <p>"We sent a verification code to your inbox."</p>
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-card__error">
                        {move || session.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-card__notice">{move || notice.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Verification Code"
                        <input
                            class="auth-form__input auth-form__input--code"
                            type="text"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>
                <button class="btn auth-card__resend" on:click=on_resend>
                    "Resend code"
                </button>
            </div>
        </main>
    }
}
