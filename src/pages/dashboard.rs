//! Teacher dashboard page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Teacher dashboard.
/// Redirects to the sign-in page once the session resolves to anonymous.
#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/auth/signin", NavigateOptions::default());
        }
    });

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| format!("Welcome back, {}.", u.display_name()))
    };

    view! {
        <div class="dashboard-page">
            <h1>"Teacher Dashboard"</h1>
            <p class="dashboard-page__greeting">{greeting}</p>
            <p>"Your classes, assignments, and score sheets live here."</p>
        </div>
    }
}
