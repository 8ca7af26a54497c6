//! # jetswitch
//!
//! Leptos + WASM frontend for the JetSwitch music-similarity service.
//!
//! The crate is presentation-layer only: pages, shared components, the
//! client-side session store, and REST helpers against the external
//! backend. Authentication, audio analysis, and similarity search live
//! behind the HTTP API; this client holds the bearer token, guards the
//! protected routes, and completes the Google OAuth redirect flow.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
