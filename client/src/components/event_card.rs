//! Card for one event in a list or grid.

use leptos::prelude::*;

use crate::net::types::Event;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let slots = format!("{} of {} slots left", event.available_slots, event.capacity);
    let image_url = event.image_url.clone();
    let has_image = !image_url.is_empty();

    view! {
        <a class="event-card" href=href>
            <Show when=move || has_image>
                <img class="event-card__image" src=image_url.clone() alt=""/>
            </Show>
            <div class="event-card__body">
                <span class="event-card__category">{event.category.clone()}</span>
                <h3 class="event-card__title">{event.title.clone()}</h3>
                <p class="event-card__meta">
                    {event.date.clone()}
                    " · "
                    {event.venue.clone()}
                </p>
                <p class="event-card__slots">{slots}</p>
            </div>
        </a>
    }
}
