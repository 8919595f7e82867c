//! Models module for the pagination component
//!
//! Data types shared by the range computation and the JavaScript API.

pub mod marker;
pub mod options;
pub mod page_set;
pub mod route;

// Re-export commonly used types
pub use marker::PageMarker;
pub use options::PaginationOptions;
pub use page_set::{DisplayConstraint, PageSet};
pub use route::Route;
