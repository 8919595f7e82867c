//! Page set and display constraint
//!
//! Both types can only be built through validating constructors, so code
//! holding one can rely on its invariants.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::pagination::PaginationError;

/// Total page count plus the page being viewed
///
/// Invariant: `1 <= current_page <= total_pages`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageSet {
    total_pages: u32,
    current_page: u32,
}

impl PageSet {
    /// Create a page set, rejecting out-of-range input
    pub fn new(total_pages: u32, current_page: u32) -> Result<Self, PaginationError> {
        if total_pages < 1 {
            return Err(PaginationError::NoPages);
        }

        if current_page < 1 || current_page > total_pages {
            return Err(PaginationError::CurrentPageOutOfRange {
                current: current_page,
                total: total_pages,
            });
        }

        Ok(Self { total_pages, current_page })
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Every page number, first to last
    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }

    pub fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }

    /// Page before the current one, if any
    pub fn previous(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Page after the current one, if any
    pub fn next(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }
}

/// Optional upper bound on the number of pages shown around the current page
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConstraint {
    max_displayed: Option<u32>,
}

impl DisplayConstraint {
    /// No bound: every page is shown
    pub fn unbounded() -> Self {
        Self { max_displayed: None }
    }

    /// Show at most `max_displayed` pages in the window
    pub fn at_most(max_displayed: u32) -> Result<Self, PaginationError> {
        if max_displayed == 0 {
            return Err(PaginationError::InvalidMaxDisplayed);
        }
        Ok(Self { max_displayed: Some(max_displayed) })
    }

    pub fn new(max_displayed: Option<u32>) -> Result<Self, PaginationError> {
        match max_displayed {
            Some(max) => Self::at_most(max),
            None => Ok(Self::unbounded()),
        }
    }

    pub fn max_displayed(&self) -> Option<u32> {
        self.max_displayed
    }

    /// Window size to use for `total_pages`, or `None` when nothing is truncated
    pub fn truncating(&self, total_pages: u32) -> Option<u32> {
        self.max_displayed.filter(|max| *max < total_pages)
    }
}
