//! # fitflow-client
//!
//! Leptos + WASM frontend for the FitFlow fashion marketplace.
//!
//! The crate is built twice: with `ssr` it is linked into the host binary for
//! server rendering; with `hydrate` it compiles to the browser bundle. The
//! auth core (`state::session`, `state::token_store`, `net::http`) does not
//! depend on the reactive runtime and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// Browser entry point invoked by the generated JS loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
