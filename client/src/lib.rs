//! # client
//!
//! Leptos + WASM frontend for the healthcare portal.
//!
//! This crate contains pages, layout components, the route guard components
//! and the browser adapters (storage, clock) that plug the `access` crate's
//! session and authorization rules into Leptos context. The same crate is
//! compiled twice: with `ssr` for server rendering and with `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
