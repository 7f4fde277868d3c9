//! Authenticated dashboard listing the user's event registrations.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::net::types::RegistrationPage;
use crate::state::session::Session;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();

    let page = RwSignal::new(1u32);
    let registrations = RwSignal::new(None::<RegistrationPage>);
    let error = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0u32);

    Effect::new(move || {
        refresh.get();
        let current_page = page.get();
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            match crate::net::events::user_registrations(&api, current_page, PAGE_SIZE).await {
                Ok(result) => {
                    registrations.set(Some(result));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let on_cancel = Callback::new(move |event_id: String| {
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            match crate::net::events::cancel_registration(&api, &event_id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}", u.firstname))
            .unwrap_or_default()
    };

    view! {
        <Header/>
        <main class="dashboard-page">
            <h1>{greeting}</h1>
            <h2>"My Registrations"</h2>
            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || registrations.get().is_some()
                fallback=|| view! { <p>"Loading registrations..."</p> }
            >
                <Show
                    when=move || {
                        registrations.get().is_some_and(|p| !p.registrations.is_empty())
                    }
                    fallback=|| {
                        view! {
                            <p class="dashboard-page__empty">
                                "You have not registered for any events yet. "
                                <a href="/events">"Browse events"</a>
                            </p>
                        }
                    }
                >
                    <ul class="dashboard-page__list">
                        {move || {
                            registrations
                                .get()
                                .map(|p| p.registrations)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|registration| {
                                    let event_id = registration.event.id.clone();
                                    view! {
                                        <li class="dashboard-page__row">
                                            <a href=format!("/events/{}", registration.event.id)>
                                                {registration.event.title.clone()}
                                            </a>
                                            <span class="dashboard-page__date">
                                                {registration.event.date.clone()}
                                            </span>
                                            <span class="dashboard-page__status">
                                                {registration.status.clone()}
                                            </span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_cancel.run(event_id.clone())
                                            >
                                                "Cancel"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <div class="dashboard-page__pager">
                    <button
                        class="btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span>{move || format!("Page {}", page.get())}</span>
                    <button
                        class="btn"
                        disabled=move || {
                            registrations
                                .get()
                                .is_none_or(|p| p.page * p.per_page >= p.total)
                        }
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </main>
    }
}
