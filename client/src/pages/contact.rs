//! Static contact page.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Header/>
        <main class="static-page">
            <h1>"Contact Us"</h1>
            <p class="static-page__tagline">
                "Questions about an event or your registration? We can help."
            </p>
            <section class="static-page__section">
                <ul class="static-page__contact">
                    <li>
                        "Email: "
                        <a href="mailto:support@eventsphere.example">
                            "support@eventsphere.example"
                        </a>
                    </li>
                    <li>"Student Affairs Office, Main Campus, Room 104"</li>
                    <li>"Monday to Friday, 9:00 to 17:00"</li>
                </ul>
            </section>
        </main>
    }
}
