//! Pagination WASM API
//!
//! This module provides the JavaScript-facing API for the pagination
//! component.
//!
//! # Module Structure
//!
//! - `helpers`: logging, serialization and error conversion
//! - `types`: view model handed to the presentation layer
//! - `core`: stateless functions (`computePageMarkers`, `buildPaginationView`)
//! - `component`: the stateful `Pagination` class

pub mod helpers;
pub mod types;
pub mod core;
pub mod component;

// Re-export all public functions from modules to maintain the current public API
pub use self::core::{build_pagination_view, compute_page_markers};
pub use component::Pagination;
pub use types::{PageItem, PageItemKind, PaginationView};
