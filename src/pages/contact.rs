//! Contact page.

use leptos::prelude::*;

/// Static contact page.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"Contact"</h1>
            <p>
                "Questions or feedback? Write to "
                <a href="mailto:hello@scorebee.example">"hello@scorebee.example"</a>
                "."
            </p>
        </section>
    }
}
