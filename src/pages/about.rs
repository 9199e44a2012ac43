//! About page.

use leptos::prelude::*;

/// Static about page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <h1>"About ScoreBee"</h1>
            <p>
                "ScoreBee keeps class scores in one place. Teachers record "
                "results, students follow their own progress."
            </p>
        </section>
    }
}
