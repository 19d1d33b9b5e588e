//! # client
//!
//! Leptos + WASM admin dashboard for the LMS backend: curriculum CRUD
//! (tracks, subjects, chapters, notes, videos, universities), exam builders,
//! exam review and spreadsheet import.
//!
//! This crate contains pages, components, UI state, the REST layer and the
//! session-storage helpers. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature lets the `server` crate render the same routes.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
