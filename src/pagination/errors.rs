//! Error types for page-range computation
//!
//! Every variant is a caller contract violation. Inputs are rejected as
//! they arrive, never clamped into range.

use thiserror::Error;

/// Errors reported by the pagination API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Total page count below one
    #[error("Invalid page count: a pagination needs at least one page")]
    NoPages,

    /// Current page outside `[1, total]`
    #[error("Current page {current} out of range (must be 1..={total})")]
    CurrentPageOutOfRange { current: u32, total: u32 },

    /// `max_displayed` set to zero
    #[error("Invalid maxDisplayed value: 0 (must be at least 1)")]
    InvalidMaxDisplayed,

    /// Route or options coming from JavaScript could not be read
    #[error("Invalid pagination options: {0}")]
    InvalidOptions(String),
}
