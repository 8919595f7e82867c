//! Stateless JavaScript-facing functions
//!
//! Thin wrappers around [`crate::pagination::compute`]: validate, compute,
//! serialize. All errors reach JavaScript as strings.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use super::types::PaginationView;
use crate::models::{PaginationOptions, Route};
use crate::pagination::compute;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Compute the page markers of a pagination control
///
/// # Parameters
/// - `total_pages`: number of pages (at least 1)
/// - `current_page`: page being viewed (1-based)
/// - `max_displayed`: window size, or `undefined` to show every page
///
/// # Returns
/// JavaScript array of tagged marker objects, e.g.
/// `[{kind: "previousLink", target: 4}, {kind: "pageNumber", page: 1}, ...]`
#[wasm_bindgen(js_name = computePageMarkers)]
pub fn compute_page_markers(
    total_pages: u32,
    current_page: u32,
    max_displayed: Option<u32>,
) -> Result<js_sys::Array, JsValue> {
    wasm_log!(
        "computePageMarkers called: total={}, current={}, maxDisplayed={:?}",
        total_pages,
        current_page,
        max_displayed
    );

    let markers = compute(total_pages, current_page, max_displayed).map_err(to_js_error)?;
    markers
        .iter()
        .map(|marker| serialize(marker, "Failed to serialize page marker"))
        .collect()
}

/// Build the full view model, including link targets
///
/// # Parameters
/// - `route_js`: current route of the hosting application
/// - `options_js`: optional `PaginationOptions`; `max_displayed` overrides
///   `options.maxDisplayed` when given
#[wasm_bindgen(js_name = buildPaginationView)]
pub fn build_pagination_view(
    total_pages: u32,
    current_page: u32,
    max_displayed: Option<u32>,
    route_js: JsValue,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let route: Route = deserialize(route_js, "Failed to deserialize route")?;
    let mut options: PaginationOptions =
        deserialize_or_default(options_js, "Failed to deserialize pagination options")?;
    if let Some(max) = max_displayed {
        if options.max_displayed.is_some_and(|configured| configured != max) {
            wasm_warn!(
                "maxDisplayed argument {} overrides options.maxDisplayed {:?}",
                max,
                options.max_displayed
            );
        }
        options.max_displayed = Some(max);
    }

    let markers =
        compute(total_pages, current_page, options.max_displayed).map_err(to_js_error)?;
    let view = PaginationView::build(&markers, &route, &options);

    wasm_info!(
        "buildPaginationView: {} items for page {}/{}",
        view.items.len(),
        current_page,
        total_pages
    );

    serialize(&view, "Failed to serialize pagination view")
}
