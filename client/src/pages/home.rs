//! Landing page with a featured-events strip.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::components::event_card::EventCard;
use crate::components::header::Header;
use crate::net::types::EventPage;

#[component]
pub fn HomePage() -> impl IntoView {
    let controller = expect_context::<SessionContext>();
    let featured = RwSignal::new(None::<EventPage>);

    // Client-only fetch; the server renders the empty state.
    Effect::new(move || {
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            if let Ok(page) = crate::net::events::featured_events(&api).await {
                featured.set(Some(page));
            }
        });
    });

    view! {
        <Header/>
        <main class="home-page">
            <section class="home-page__hero">
                <h1>"Discover campus events"</h1>
                <p>"Talks, festivals, workshops, and everything in between."</p>
                <a class="btn btn--primary" href="/events">"Browse Events"</a>
            </section>
            <section class="home-page__featured">
                <h2>"Featured"</h2>
                <Show
                    when=move || featured.get().is_some()
                    fallback=|| view! { <p>"Loading events..."</p> }
                >
                    <div class="home-page__cards">
                        {move || {
                            featured
                                .get()
                                .map(|page| page.events)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|event| view! { <EventCard event=event/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </main>
    }
}
