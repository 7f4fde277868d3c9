//! Static about page.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Header/>
        <main class="static-page">
            <h1>"About EventSphere"</h1>
            <p class="static-page__tagline">
                "Your gateway to campus life and memorable experiences."
            </p>
            <section class="static-page__section">
                <h2>"Our Mission"</h2>
                <p>
                    "EventSphere is the central hub for campus events, connecting \
                     students with opportunities to learn, grow, and create lasting \
                     memories. Campus life extends far beyond the classroom, and our \
                     platform makes it easy to discover and join events that match \
                     your interests."
                </p>
            </section>
            <section class="static-page__section">
                <h2>"What We Offer"</h2>
                <ul class="static-page__features">
                    <li>"Event discovery with search and category filters"</li>
                    <li>"One-click registration with instant confirmation"</li>
                    <li>"A personal dashboard tracking your registrations"</li>
                </ul>
            </section>
        </main>
    }
}
