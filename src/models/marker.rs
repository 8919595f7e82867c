//! Page markers produced by the range computation

use serde::{Deserialize, Serialize};

/// One entry of a pagination control, in display order
///
/// Serialized as an internally tagged object, e.g.
/// `{"kind": "pageNumber", "page": 3}` or `{"kind": "ellipsis"}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageMarker {
    /// A linkable page other than the current one
    PageNumber { page: u32 },
    /// The page being viewed
    CurrentPage { page: u32 },
    /// Hidden pages between an anchor and the window
    Ellipsis,
    /// Link to the page before the current one
    PreviousLink { target: u32 },
    /// Link to the page after the current one
    NextLink { target: u32 },
}

impl PageMarker {
    /// Marker for `page`, current or not
    pub fn for_page(page: u32, current_page: u32) -> Self {
        if page == current_page {
            PageMarker::CurrentPage { page }
        } else {
            PageMarker::PageNumber { page }
        }
    }

    /// Page this marker displays (page numbers and the current page only)
    pub fn page(&self) -> Option<u32> {
        match self {
            PageMarker::PageNumber { page } | PageMarker::CurrentPage { page } => Some(*page),
            _ => None,
        }
    }

    /// Page a click on this marker navigates to, if it is a link
    pub fn link_target(&self) -> Option<u32> {
        match self {
            PageMarker::PageNumber { page } => Some(*page),
            PageMarker::PreviousLink { target } | PageMarker::NextLink { target } => Some(*target),
            PageMarker::CurrentPage { .. } | PageMarker::Ellipsis => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, PageMarker::CurrentPage { .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}
