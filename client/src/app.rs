//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::net::api::ApiClient;
use crate::net::auth::AuthGateway;
use crate::net::http::client_transport;
use crate::pages::{
    about::AboutPage, account::AccountPage, contact::ContactPage, dashboard::DashboardPage,
    event_detail::EventDetailPage, events::EventsPage, gallery::GalleryPage, home::HomePage,
    login::LoginPage, signup::SignupPage, sitemap::SitemapPage, verify_email::VerifyEmailPage,
};
use crate::state::session::{AppSessionController, Session, SessionController};
use crate::state::store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Context handle for the shared session controller.
///
/// The controller itself is single-threaded (it holds `Rc` state), so what
/// goes into context is a thread-local stored value; the handle is `Copy`
/// and safe to capture in views, while the controller is only touched from
/// effects and event handlers on the client.
pub type SessionContext = StoredValue<Rc<AppSessionController>, LocalStorage>;

/// Root application component.
///
/// Builds the session controller (store + transport + gateway), provides it
/// via context together with the reactive [`Session`] signal, and kicks off
/// startup hydration once on the client.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::for_runtime();
    let client = ApiClient::from_build_env(client_transport(), store);
    let controller: Rc<AppSessionController> =
        Rc::new(SessionController::new(AuthGateway::new(client)));

    // Components read session state through this signal; the controller
    // pushes every mutation into it.
    let session = RwSignal::new(Session::default());
    controller.set_watcher(move |s| session.set(s.clone()));

    provide_context(session);
    provide_context::<SessionContext>(StoredValue::new_local(controller.clone()));

    #[cfg(feature = "hydrate")]
    {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.initialize().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/eventsphere.css"/>
        <Title text="EventSphere"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("gallery") view=GalleryPage/>
                <Route path=StaticSegment("sitemap") view=SitemapPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("account")
                    view=|| view! { <Protected><AccountPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
