//! # safetrack-client
//!
//! Leptos + WASM frontend for the SafeTrack family-location dashboard.
//!
//! This crate contains pages, components, view-state models, and the static
//! seed data they render. There is no network layer; every page builds its
//! state from `data::seed` when it mounts.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    log::info!("safetrack client hydrating");
    leptos::mount::hydrate_body(app::App);
}
