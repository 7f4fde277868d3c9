//! Gallery page: event imagery pulled from the public event list.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::components::header::Header;
use crate::net::events::EventQuery;

const PAGE_SIZE: u32 = 24;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let controller = expect_context::<SessionContext>();
    let images = RwSignal::new(None::<Vec<(String, String)>>);

    // Client-only fetch; the server renders the empty state.
    Effect::new(move || {
        let api = controller.with_value(|c| c.api().clone());
        leptos::task::spawn_local(async move {
            let query =
                EventQuery { page: Some(1), per_page: Some(PAGE_SIZE), ..EventQuery::default() };
            if let Ok(page) = crate::net::events::list_events(&api, &query).await {
                let found = page
                    .events
                    .into_iter()
                    .filter(|e| !e.image_url.is_empty())
                    .map(|e| (e.image_url, e.title))
                    .collect::<Vec<_>>();
                images.set(Some(found));
            }
        });
    });

    view! {
        <Header/>
        <main class="gallery-page">
            <h1>"Gallery"</h1>
            <p class="static-page__tagline">"Browse through images and relive memories."</p>
            <Show
                when=move || images.get().is_some()
                fallback=|| view! { <p>"Loading gallery..."</p> }
            >
                <div class="gallery-page__grid">
                    {move || {
                        images
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(url, title)| {
                                view! {
                                    <figure class="gallery-page__item">
                                        <img src=url alt=title.clone()/>
                                        <figcaption>{title}</figcaption>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </main>
    }
}
