//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::TeacherDashboardPage, home::HomePage,
    signin::SignInPage, signup::SignUpPage, student::StudentDashboardPage,
};
use crate::state::auth::AuthState;

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

/// Root application component.
///
/// Provides the auth context, restores the session on hydration, and sets up
/// client-side routing with the navbar above the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Session restore + theme preference, once the WASM bundle is running.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        crate::util::dark_mode::apply(crate::util::dark_mode::read_preference());
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(AuthState {
                user,
                loading: false,
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/scorebee-ui.css"/>
        <Title text="ScoreBee"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=TeacherDashboardPage/>
                    <Route path=StaticSegment("student") view=StudentDashboardPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
                </Routes>
            </main>
        </Router>
    }
}
