//! # portal-client
//!
//! Leptos + WASM frontend for the staffing portal (employees, jobs, job
//! applications, companies).
//!
//! This crate contains the auth-aware HTTP transport, the route guard that
//! gates every page behind a stored token, the role-filtered sidebar menu,
//! login form validators, and the pages that tie them together.

pub mod app;
pub mod components;
pub mod config;
pub mod navigation;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
