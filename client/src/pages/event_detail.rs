//! Event detail page with register / cancel actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::net::types::Event;
use crate::routes::client_login_redirect;
use crate::state::session::Session;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let controller = expect_context::<SessionContext>();
    let params = use_params_map();

    let event = RwSignal::new(None::<Event>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Bumped after register/cancel to force a re-fetch.
    let refresh = RwSignal::new(0u32);
    let redirect = RwSignal::new(None::<String>);

    let event_id = move || params.get_untracked().get("id").unwrap_or_default();

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        refresh.get();
        let id = params.get().get("id").unwrap_or_default();
        if id.is_empty() {
            return;
        }
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            match crate::net::events::get_event(&api, &id).await {
                Ok(found) => {
                    event.set(Some(found));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let is_registered = move || event.get().and_then(|e| e.is_registered).unwrap_or(false);
    let sold_out = move || event.get().is_some_and(|e| e.available_slots == 0);

    let on_register = move |_| {
        if busy.get() {
            return;
        }
        if session.get_untracked().user.is_none() {
            // A 401 round trip is pointless when we already know there is
            // no session.
            let from = format!("/events/{}", event_id());
            redirect.set(Some(client_login_redirect(&from)));
            return;
        }
        busy.set(true);
        let api = controller.with_value(|c| c.api().clone());
        let id = event_id();
        leptos::task::spawn_local(async move {
            match crate::net::events::register_for_event(&api, &id).await {
                Ok(_) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let on_cancel = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = controller.with_value(|c| c.api().clone());
        let id = event_id();
        leptos::task::spawn_local(async move {
            match crate::net::events::cancel_registration(&api, &id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <Header/>
        <main class="event-detail">
            <Show when=move || error.get().is_some()>
                <p class="event-detail__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || event.get().is_some()
                fallback=|| view! { <p>"Loading event..."</p> }
            >
                {move || {
                    event
                        .get()
                        .map(|e| {
                            let image_url = e.image_url.clone();
                            let has_image = !image_url.is_empty();
                            view! {
                                <article class="event-detail__body">
                                    <Show when=move || has_image>
                                        <img class="event-detail__image" src=image_url.clone() alt=""/>
                                    </Show>
                                    <h1>{e.title.clone()}</h1>
                                    <p class="event-detail__meta">
                                        {e.date.clone()} " " {e.time.clone()} " · " {e.venue.clone()}
                                    </p>
                                    <p class="event-detail__organizer">
                                        "Hosted by " {e.organizer_name.clone()}
                                    </p>
                                    <p class="event-detail__description">{e.description.clone()}</p>
                                    <p class="event-detail__slots">
                                        {format!("{} of {} slots available", e.available_slots, e.capacity)}
                                    </p>
                                </article>
                            }
                        })
                }}
                <div class="event-detail__actions">
                    <Show
                        when=is_registered
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get() || sold_out()
                                    on:click=on_register
                                >
                                    {move || if sold_out() { "Sold Out" } else { "Register" }}
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--danger" disabled=move || busy.get() on:click=on_cancel>
                            "Cancel Registration"
                        </button>
                    </Show>
                </div>
            </Show>
        </main>
    }
}
