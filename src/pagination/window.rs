//! Window of page numbers displayed around the current page

use crate::models::PageSet;

/// Contiguous, inclusive range of page numbers
///
/// Invariants: `1 <= start <= current <= end <= total`, and the window spans
/// `min(max_displayed, total)` pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    start: u32,
    end: u32,
    total: u32,
}

impl PageWindow {
    /// Window of `max_displayed` pages centred on the current page
    ///
    /// With an even size the extra page goes to the left: `max_displayed = 4`
    /// around page 5 yields 3..=6. Near either end the window is shifted so
    /// that it keeps its size.
    pub fn around(pages: &PageSet, max_displayed: u32) -> Self {
        let total = pages.total_pages();
        let size = max_displayed.clamp(1, total);

        // size <= total, so neither bound can overflow
        let start = pages
            .current_page()
            .saturating_sub(size / 2)
            .clamp(1, total - size + 1);
        let end = start + (size - 1);

        Self { start, end, total }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the window (never zero)
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, page: u32) -> bool {
        (self.start..=self.end).contains(&page)
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn touches_first(&self) -> bool {
        self.start == 1
    }

    pub fn touches_last(&self) -> bool {
        self.end == self.total
    }

    /// Pages hidden between page 1 and the window
    pub fn left_gap(&self) -> u32 {
        self.start.saturating_sub(2)
    }

    /// Pages hidden between the window and the last page
    pub fn right_gap(&self) -> u32 {
        (self.total - self.end).saturating_sub(1)
    }
}
