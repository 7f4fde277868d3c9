//! Account page: view and edit the signed-in user's profile.

use leptos::prelude::*;
use serde_json::json;

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::net::types::UserPatch;
use crate::state::session::Session;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    // Seed the form once the session carries a user.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(user) = session.get().user {
            firstname.set(user.firstname);
            lastname.set(user.lastname);
            phone.set(user.phone.unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let patch = UserPatch {
            firstname: Some(firstname.get().trim().to_owned()).filter(|v| !v.is_empty()),
            lastname: Some(lastname.get().trim().to_owned()).filter(|v| !v.is_empty()),
            phone: Some(phone.get().trim().to_owned()).filter(|v| !v.is_empty()),
            ..UserPatch::default()
        };
        busy.set(true);
        notice.set(String::new());
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            let body = json!({
                "firstname": patch.firstname.clone(),
                "lastname": patch.lastname.clone(),
                "phone": patch.phone.clone(),
            });
            let result: Result<serde_json::Value, _> =
                controller.api().put("/api/v1/user/profile", Some(body)).await;
            match result {
                Ok(_) => {
                    controller.update_user(patch);
                    notice.set("Profile updated.".to_owned());
                }
                Err(e) => notice.set(format!("Update failed: {e}")),
            }
            busy.set(false);
        });
    };

    let email = move || {
        session.get().user.map(|u| u.email).unwrap_or_default()
    };

    view! {
        <Header/>
        <main class="account-page">
            <h1>"My Account"</h1>
            <p class="account-page__email">{email}</p>
            <Show when=move || !notice.get().is_empty()>
                <p class="account-page__notice">{move || notice.get()}</p>
            </Show>
            <form class="auth-form" on:submit=on_submit>
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
                    "Phone"
                    <input
                        class="auth-form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </main>
    }
}
