//! # portfolio
//!
//! Leptos + WASM personal portfolio page.
//!
//! This crate contains the page, its components, reactive state, browser
//! helpers, and the mail-relay client used by the contact form. The
//! `hydrate` feature builds the browser bundle; `ssr` is enabled by the
//! server crate for rendering.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::dom::console_greeting(content::PROFILE.name, content::PROFILE.email, content::PROFILE.phone);
    leptos::mount::hydrate_body(app::App);
}
