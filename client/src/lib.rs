//! # client
//!
//! Leptos + WASM frontend for the nightswitch dark-mode site. The theme
//! controller keeps the `dark-mode` class on `<body>` in agreement with
//! the preference persisted in `localStorage`; the UI is a single page
//! with one toggle control.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod theme;

/// Client-side entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
