//! # client
//!
//! Leptos + WASM frontend for the PathFinder mentor site.
//!
//! The landing page shows headline statistics that count up when scrolled
//! into view (driven by the `countup` crate), and the chat page runs the
//! scripted mentor conversation from the `mentor` crate. Browser plumbing
//! (`IntersectionObserver`, `requestAnimationFrame`, timers) lives in
//! [`util`] behind the `hydrate` feature so the same components render on
//! the server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
