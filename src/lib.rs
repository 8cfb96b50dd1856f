//! # furnimall-admin
//!
//! Leptos + WASM admin dashboard for the Furnimall furniture catalog.
//!
//! Staff sign in, manage products (add/edit/delete with image uploads),
//! review registered customers, and read/delete inbound messages. All
//! persistence lives behind the REST API; this crate mirrors entities into
//! transient reactive state and never acts as a source of truth itself.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log bridges and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
