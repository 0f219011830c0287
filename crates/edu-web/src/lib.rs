//! EduAgent Web Frontend
//!
//! Leptos-based WASM frontend over `edu-client`.

mod app;
mod components;
mod pages;
mod session;
mod storage;

pub use app::App;
pub use storage::LocalStorageAuthStore;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
