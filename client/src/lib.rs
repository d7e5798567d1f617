//! # client
//!
//! Leptos + WASM frontend for the ITAM portal.
//!
//! This crate contains the route table, the navigation guard that keeps
//! signed-out users on the public pages, session-token storage, the API
//! helpers for the auth service, and the route pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// Browser entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
