//! Masonry Grid Layout WASM Module
//!
//! Arranges variable-height card elements into a dense column layout,
//! animates card entry, and recomputes the layout when cards are added,
//! removed, or change size underneath it.

pub mod models;
pub mod layout;
pub mod events;
pub mod grid;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use api::MasonryGrid;
pub use grid::errors::GridError;
pub use grid::Grid;
pub use models::config::GridConfig;
pub use models::ids::CardId;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("masonry grid WASM module initialized");
}
