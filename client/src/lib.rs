//! # reward-console
//!
//! Leptos + WASM admin dashboard for a rewards program: a login gate with
//! attempt lockout and session expiry, user and reward-request tables with
//! approve/reject and archive flows, and a user-growth chart.
//!
//! All records are in memory. Demo mode fills them with synthetic data;
//! only the login bookkeeping persists, in browser local storage.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
