//! ClinNota Web Frontend
//!
//! Leptos-based WASM marketing site with the plan selection and payment
//! confirmation pages. Build with `trunk build --release` and point the
//! relay's `STATIC_DIR` at the output.

mod api;
mod app;
mod components;
mod forms;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
