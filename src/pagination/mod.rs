//! Page-range computation
//!
//! Turns a page count, the current page and an optional display bound into
//! the ordered list of markers a pagination control shows:
//!
//! ```text
//! total=10, current=5, max=3:   ‹ 1 … 4 [5] 6 … 10 ›
//! total=5,  current=3, max=3:   ‹ 1 2 [3] 4 5 ›
//! total=10, current=1, max=3:     [1] 2 3 … 10 ›
//! ```
//!
//! When truncating, the first and last page stay visible as anchors and an
//! ellipsis stands in for the pages hidden between an anchor and the
//! window. A side without hidden pages gets no ellipsis.

pub mod errors;
pub mod window;

pub use errors::PaginationError;
pub use window::PageWindow;

use crate::models::{DisplayConstraint, PageMarker, PageSet};

/// Compute the markers for `total_pages` pages viewed at `current_page`
///
/// # Errors
/// Returns a [`PaginationError`] when `total_pages` is zero, `current_page`
/// lies outside `1..=total_pages`, or `max_displayed` is `Some(0)`.
pub fn compute(
    total_pages: u32,
    current_page: u32,
    max_displayed: Option<u32>,
) -> Result<Vec<PageMarker>, PaginationError> {
    let pages = PageSet::new(total_pages, current_page)?;
    let constraint = DisplayConstraint::new(max_displayed)?;
    Ok(compute_markers(&pages, &constraint))
}

/// Compute markers for an already validated page set
pub fn compute_markers(pages: &PageSet, constraint: &DisplayConstraint) -> Vec<PageMarker> {
    let current = pages.current_page();
    let total = pages.total_pages();
    let mut markers = Vec::new();

    if let Some(target) = pages.previous() {
        markers.push(PageMarker::PreviousLink { target });
    }

    match constraint.truncating(total) {
        None => {
            markers.extend(pages.pages().map(|page| PageMarker::for_page(page, current)));
        }
        Some(max_displayed) => {
            let window = PageWindow::around(pages, max_displayed);

            if !window.touches_first() {
                markers.push(PageMarker::for_page(1, current));
                if window.left_gap() > 0 {
                    markers.push(PageMarker::Ellipsis);
                }
            }

            markers.extend(window.pages().map(|page| PageMarker::for_page(page, current)));

            if !window.touches_last() {
                if window.right_gap() > 0 {
                    markers.push(PageMarker::Ellipsis);
                }
                markers.push(PageMarker::for_page(total, current));
            }
        }
    }

    if let Some(target) = pages.next() {
        markers.push(PageMarker::NextLink { target });
    }

    log::trace!(
        "pagination: total={} current={} max={:?} -> {} markers",
        total,
        current,
        constraint.max_displayed(),
        markers.len()
    );

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markers: &[PageMarker]) -> String {
        markers
            .iter()
            .map(|m| match m {
                PageMarker::PageNumber { page } => page.to_string(),
                PageMarker::CurrentPage { page } => format!("[{}]", page),
                PageMarker::Ellipsis => "…".to_string(),
                PageMarker::PreviousLink { .. } => "‹".to_string(),
                PageMarker::NextLink { .. } => "›".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_all_pages_without_bound() {
        let markers = compute(5, 3, None).unwrap();
        assert_eq!(render(&markers), "‹ 1 2 [3] 4 5 ›");
    }

    #[test]
    fn test_bound_at_least_total_shows_all() {
        assert_eq!(render(&compute(4, 2, Some(4)).unwrap()), "‹ 1 [2] 3 4 ›");
        assert_eq!(render(&compute(4, 2, Some(9)).unwrap()), "‹ 1 [2] 3 4 ›");
    }

    #[test]
    fn test_truncates_both_sides() {
        let markers = compute(10, 5, Some(3)).unwrap();
        assert_eq!(render(&markers), "‹ 1 … 4 [5] 6 … 10 ›");
    }

    #[test]
    fn test_no_ellipsis_when_nothing_is_hidden() {
        assert_eq!(render(&compute(5, 3, Some(3)).unwrap()), "‹ 1 2 [3] 4 5 ›");
        assert_eq!(render(&compute(4, 1, Some(3)).unwrap()), "[1] 2 3 4 ›");
        assert_eq!(render(&compute(4, 4, Some(3)).unwrap()), "‹ 1 2 3 [4]");
    }

    #[test]
    fn test_truncates_single_side() {
        assert_eq!(render(&compute(10, 1, Some(3)).unwrap()), "[1] 2 3 … 10 ›");
        assert_eq!(render(&compute(10, 10, Some(3)).unwrap()), "‹ 1 … 8 9 [10]");
        assert_eq!(render(&compute(10, 3, Some(3)).unwrap()), "‹ 1 2 [3] 4 … 10 ›");
    }

    #[test]
    fn test_even_bound_biases_left() {
        assert_eq!(render(&compute(10, 5, Some(4)).unwrap()), "‹ 1 … 3 4 [5] 6 … 10 ›");
    }

    #[test]
    fn test_single_page() {
        assert_eq!(render(&compute(1, 1, None).unwrap()), "[1]");
        assert_eq!(render(&compute(1, 1, Some(1)).unwrap()), "[1]");
    }

    #[test]
    fn test_window_of_one() {
        assert_eq!(render(&compute(10, 5, Some(1)).unwrap()), "‹ 1 … [5] … 10 ›");
        assert_eq!(render(&compute(10, 2, Some(1)).unwrap()), "‹ 1 [2] … 10 ›");
    }

    #[test]
    fn test_largest_page_count() {
        let max = u32::MAX;
        assert_eq!(
            compute(max, max, Some(3)).unwrap(),
            vec![
                PageMarker::PreviousLink { target: max - 1 },
                PageMarker::PageNumber { page: 1 },
                PageMarker::Ellipsis,
                PageMarker::PageNumber { page: max - 2 },
                PageMarker::PageNumber { page: max - 1 },
                PageMarker::CurrentPage { page: max },
            ]
        );
        assert_eq!(
            render(&compute(max, max - 1, Some(3)).unwrap()),
            format!("‹ 1 … {} [{}] {} ›", max - 2, max - 1, max)
        );
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert_eq!(compute(0, 1, None), Err(PaginationError::NoPages));
        assert_eq!(
            compute(3, 4, None),
            Err(PaginationError::CurrentPageOutOfRange { current: 4, total: 3 })
        );
        assert_eq!(compute(3, 1, Some(0)), Err(PaginationError::InvalidMaxDisplayed));
    }
}
