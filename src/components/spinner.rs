//! Indeterminate loading spinner.

use leptos::prelude::*;

/// Small CSS-driven spinner shown while the session restore is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" aria-label="Loading"></span> }
}
