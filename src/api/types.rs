//! View model handed to the presentation layer
//!
//! Each marker becomes a [`PageItem`] with a display label and, for links,
//! the route to navigate to.

use serde::{Deserialize, Serialize};

use crate::models::{PageMarker, PaginationOptions, Route};

/// Kind of a rendered pagination entry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageItemKind {
    Page,
    Current,
    Ellipsis,
    Previous,
    Next,
}

/// One rendered entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageItem {
    pub kind: PageItemKind,

    /// Page shown (page/current) or navigated to (previous/next)
    pub page: Option<u32>,

    pub label: String,

    /// Link target; `None` for the current page and ellipses
    pub to: Option<Route>,
}

impl PageItem {
    pub fn from_marker(marker: &PageMarker, route: &Route, options: &PaginationOptions) -> Self {
        let link = |page: u32| Some(route.with_page(&options.page_query_param, page));

        match *marker {
            PageMarker::PageNumber { page } => Self {
                kind: PageItemKind::Page,
                page: Some(page),
                label: page.to_string(),
                to: link(page),
            },
            PageMarker::CurrentPage { page } => Self {
                kind: PageItemKind::Current,
                page: Some(page),
                label: page.to_string(),
                to: None,
            },
            PageMarker::Ellipsis => Self {
                kind: PageItemKind::Ellipsis,
                page: None,
                label: options.ellipsis_label.clone(),
                to: None,
            },
            PageMarker::PreviousLink { target } => Self {
                kind: PageItemKind::Previous,
                page: Some(target),
                label: options.previous_label.clone(),
                to: link(target),
            },
            PageMarker::NextLink { target } => Self {
                kind: PageItemKind::Next,
                page: Some(target),
                label: options.next_label.clone(),
                to: link(target),
            },
        }
    }

    pub fn is_link(&self) -> bool {
        self.to.is_some()
    }
}

/// Everything a pagination control needs to render
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub items: Vec<PageItem>,
    pub prev_available: bool,
    pub next_available: bool,
}

impl PaginationView {
    pub fn build(markers: &[PageMarker], route: &Route, options: &PaginationOptions) -> Self {
        let items: Vec<PageItem> = markers
            .iter()
            .map(|marker| PageItem::from_marker(marker, route, options))
            .collect();

        Self {
            prev_available: items.iter().any(|item| item.kind == PageItemKind::Previous),
            next_available: items.iter().any(|item| item.kind == PageItemKind::Next),
            items,
        }
    }

    pub fn count(&self, kind: PageItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    pub fn find(&self, kind: PageItemKind) -> Option<&PageItem> {
        self.items.iter().find(|item| item.kind == kind)
    }
}
