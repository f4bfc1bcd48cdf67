/// Link Copier - Chrome Extension for copying hyperlink destinations
/// Built with Rust + WASM + Yew

pub mod active_target;
mod background;
mod chrome;
pub mod constants;
mod content;
pub mod geometry;
pub mod handler;
mod i18n;
pub mod listeners;
pub mod position;
pub mod storage;
pub mod tooltip;
pub mod ui;
mod util;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the content script: tooltip interaction on the host page
#[wasm_bindgen]
pub fn start_content() {
    content::run();
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the service worker logic
#[wasm_bindgen]
pub fn start_background() {
    background::run();
}
