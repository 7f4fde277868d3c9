//! Public event listing with search, category filter, and pagination.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::components::event_card::EventCard;
use crate::components::header::Header;
use crate::net::events::EventQuery;
use crate::net::types::{EventCategory, EventPage};

const PAGE_SIZE: u32 = 12;

#[component]
pub fn EventsPage() -> impl IntoView {
    let controller = expect_context::<SessionContext>();

    let page = RwSignal::new(1u32);
    let search_input = RwSignal::new(String::new());
    let applied_search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<String>);
    let events = RwSignal::new(None::<EventPage>);
    let categories = RwSignal::new(Vec::<EventCategory>::new());
    let error = RwSignal::new(None::<String>);

    // One-shot category fetch.
    Effect::new(move || {
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            if let Ok(list) = crate::net::events::list_categories(&api).await {
                categories.set(list);
            }
        });
    });

    // Re-fetch whenever page, search, or category changes.
    Effect::new(move || {
        let query = EventQuery {
            page: Some(page.get()),
            per_page: Some(PAGE_SIZE),
            search: Some(applied_search.get()).filter(|s| !s.is_empty()),
            category_id: category.get(),
            ..EventQuery::default()
        };
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            match crate::net::events::list_events(&api, &query).await {
                Ok(result) => {
                    events.set(Some(result));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        applied_search.set(search_input.get().trim().to_owned());
    };

    let total_pages = move || events.get().map(|p| p.total_pages).unwrap_or(1).max(1);

    view! {
        <Header/>
        <main class="events-page">
            <h1>"Events"</h1>
            <form class="events-page__filters" on:submit=on_search>
                <input
                    class="events-page__search"
                    type="search"
                    placeholder="Search events"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <select
                    class="events-page__category"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        page.set(1);
                        category.set(Some(value).filter(|v| !v.is_empty()));
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <button class="btn" type="submit">"Search"</button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class="events-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || events.get().is_some()
                fallback=|| view! { <p>"Loading events..."</p> }
            >
                <div class="events-page__grid">
                    {move || {
                        events
                            .get()
                            .map(|p| p.events)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|event| view! { <EventCard event=event/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="events-page__pager">
                    <button
                        class="btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span>{move || format!("Page {} of {}", page.get(), total_pages())}</span>
                    <button
                        class="btn"
                        disabled=move || page.get() >= total_pages()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </main>
    }
}
