//! # builder-client
//!
//! Leptos + WASM frontend for the Builder PDF product. Users fill a form,
//! optionally delegate content authorship to the backend, and download or
//! share the generated document.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and browser-storage helpers. All browser side effects are gated
//! behind the `hydrate` feature so state and validation logic stays
//! testable on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
