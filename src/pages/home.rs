//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page with a call to action for the visitor's current state.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="hero">
            <h1>"ScoreBee"</h1>
            <p>"Scores, assignments, and progress for teachers and students."</p>
            {move || match auth.get().role() {
                Some(role) => {
                    view! {
                        <a href=role.dashboard_path() class="btn btn--primary">
                            "Go to your dashboard"
                        </a>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <a href="/auth/signup" class="btn btn--primary">
                            "Get started"
                        </a>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
