//! Pagination WASM Module
//!
//! Computes the page list of a pagination control (page numbers, current
//! page, ellipses, previous/next links) and the link targets for each entry.
//! Rendering and navigation stay with the host application.

pub mod models;
pub mod pagination;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use pagination::{compute, compute_markers, PageWindow, PaginationError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger already initialized");
        }
    }

    log::info!("Pagination WASM module initialized");
}
