/// Tab Scout - Chrome side panel extension for quick tab actions
/// Built with Rust + WASM + Yew

mod chrome;
mod grouping;
mod host;
mod inspect;
mod pattern;
mod resolver;
mod settings;
mod tab_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export pattern matching for JavaScript access
#[wasm_bindgen]
pub fn url_matches_pattern(pattern: &str, url: &str) -> bool {
    pattern::url_matches_pattern(pattern, url)
}

// Start the Yew app for the side panel
#[wasm_bindgen]
pub fn start_side_panel() {
    yew::Renderer::<ui::sidepanel::SidePanel>::new().render();
}

// Start the Yew app for the internal demo page
#[wasm_bindgen]
pub fn start_internal_page() {
    yew::Renderer::<ui::internal::InternalPage>::new().render();
}
