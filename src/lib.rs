//! Marketing site - small-business landing page
//!
//! A single-page site with a self-rotating testimonial carousel and a contact
//! modal that relays submissions to a remote form sink, built with Leptos and
//! WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
