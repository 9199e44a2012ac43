//! Sign-up page with an account creation form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Sign-up form. A successful sign-up signs the user in directly and lands
/// on their role dashboard.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let first_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }

        let name_value = first_name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&name_value, &email_value, &password_value).await {
                    Ok(user) => {
                        let path = user.role.dashboard_path();
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                        });
                        navigate(path, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(err));
                        submitting.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &auth, name_value, email_value, password_value);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Sign Up"</h1>
            <form
                class="auth-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-form__label">
                    "First Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Create account"
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <a href="/auth/signin">"Sign In"</a>
            </p>
        </div>
    }
}
