//! # mindink-client
//!
//! Leptos frontend for the MindInk marketing site.
//!
//! The crate renders the public landing page (server-side under `ssr`,
//! hydrated in the browser under `hydrate`) and the thin dashboard route that
//! signed-in visitors are sent to. Session state comes from the server's auth
//! adapter; everything else on the page is static content.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
