//! Static sitemap page listing every reachable route.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn SitemapPage() -> impl IntoView {
    view! {
        <Header/>
        <main class="static-page">
            <h1>"Sitemap"</h1>
            <section class="static-page__section">
                <h2>"Explore"</h2>
                <ul class="static-page__links">
                    <li><a href="/">"Home"</a></li>
                    <li><a href="/events">"Events"</a></li>
                    <li><a href="/gallery">"Gallery"</a></li>
                    <li><a href="/about">"About"</a></li>
                    <li><a href="/contact">"Contact"</a></li>
                </ul>
            </section>
            <section class="static-page__section">
                <h2>"Your Account"</h2>
                <ul class="static-page__links">
                    <li><a href="/login">"Log In"</a></li>
                    <li><a href="/signup">"Sign Up"</a></li>
                    <li><a href="/dashboard">"My Events"</a></li>
                    <li><a href="/account">"My Account"</a></li>
                </ul>
            </section>
        </main>
    }
}
