//! Site-wide top navigation bar.
//!
//! Shows role-aware nav links, the account dropdown for signed-in users,
//! and sign-in/sign-up links for anonymous visitors. The dropdown closes on
//! outside click, after navigating through it, and after a successful
//! logout.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::spinner::Spinner;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::nav::nav_items;

/// Top navigation bar, rendered above the routed page content.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let links = move || {
        let pathname = location.pathname.get();
        nav_items(auth.get().role())
            .into_iter()
            .map(|item| {
                let class = if item.is_active(&pathname) {
                    "navbar__link navbar__link--active"
                } else {
                    "navbar__link"
                };
                view! {
                    <a href=item.path class=class>
                        {item.name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                "ScoreBee"
                <span class="navbar__brand-accent">"\u{1f41d}"</span>
            </a>

            <nav class="navbar__links">
                {links}
                {move || {
                    let state = auth.get();
                    if state.loading {
                        view! { <Spinner/> }.into_any()
                    } else if let Some(user) = state.user {
                        view! { <AccountMenu user=user/> }.into_any()
                    } else {
                        view! {
                            <div class="navbar__auth">
                                <a href="/auth/signin" class="navbar__link">
                                    "Sign In"
                                </a>
                                <a href="/auth/signup" class="btn btn--primary">
                                    "Sign Up"
                                </a>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </nav>
        </header>
    }
}

/// Identity button plus dropdown panel for a signed-in user.
#[component]
fn AccountMenu(user: User) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let open = RwSignal::new(false);
    let logging_out = RwSignal::new(false);
    let menu_ref = NodeRef::<Div>::new();

    let navigate = use_navigate();

    // Close when a pointer press lands outside the menu subtree. One
    // listener per mount; removed when the menu unmounts.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::pointerdown, move |ev| {
            if !open.get_untracked() {
                return;
            }
            let inside = menu_ref.get_untracked().is_some_and(|menu| {
                ev.target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                    .is_some_and(|node| menu.contains(Some(&node)))
            });
            if !inside {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let dashboard_path = user.role.dashboard_path();
    let role_label = user.role.as_str();
    let initial = user.initial().to_string();
    let display_name = user.display_name().to_owned();
    let panel_name = display_name.clone();
    let avatar = user.avatar.clone();

    let on_logout = Callback::new(move |()| {
        if logging_out.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            logging_out.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::logout().await {
                    Ok(()) => {
                        open.set(false);
                        auth.update(|a| a.user = None);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        // Operator diagnostics only; the menu stays open so
                        // the user can retry.
                        log::error!("logout failed: {err}");
                        logging_out.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &auth);
        }
    });

    view! {
        <div class="navbar__account" node_ref=menu_ref>
            <button
                class="navbar__account-button"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {match avatar {
                    Some(src) => view! { <img class="navbar__avatar" src=src alt="Profile"/> }.into_any(),
                    None => view! { <span class="navbar__initial">{initial}</span> }.into_any(),
                }}
                <span class="navbar__name">{display_name}</span>
                <svg
                    class="navbar__chevron"
                    class=("navbar__chevron--open", move || open.get())
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <path d="m19 9-7 7-7-7"></path>
                </svg>
            </button>

            <Show when=move || open.get()>
                <div class="dropdown">
                    <div class="dropdown__header">
                        <p class="dropdown__name">{panel_name.clone()}</p>
                        <p class="dropdown__role">{role_label}</p>
                    </div>
                    <a
                        href=dashboard_path
                        class="dropdown__link"
                        on:click=move |_| open.set(false)
                    >
                        "Dashboard"
                    </a>
                    <button
                        class="dropdown__logout"
                        disabled=move || logging_out.get()
                        on:click=move |_| on_logout.run(())
                    >
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
