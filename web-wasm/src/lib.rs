//! Recycle Me Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod file_reader;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_build_env();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
