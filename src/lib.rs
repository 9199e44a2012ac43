//! # scorebee-ui
//!
//! Leptos + WASM frontend for the ScoreBee scoring application.
//!
//! This crate contains pages, components, application state, and the thin
//! REST client for the auth endpoints. The server renders the initial HTML
//! (`ssr` feature) and the WASM bundle hydrates it in the browser
//! (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Entry point called from the WASM bundle to hydrate the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
