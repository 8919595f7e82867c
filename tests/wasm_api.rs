//! WASM API test
//!
//! Exercises the JavaScript-facing functions and the `Pagination` class.
//! Runs under `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use pagination_wasm::api::{build_pagination_view, compute_page_markers, Pagination, PaginationView};
use pagination_wasm::{PageMarker, Route};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn route_js(route: &Route) -> JsValue {
    route
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn test_compute_page_markers() {
    let array = compute_page_markers(10, 5, Some(3)).unwrap();
    let markers: Vec<PageMarker> = array
        .iter()
        .map(|value| serde_wasm_bindgen::from_value(value).unwrap())
        .collect();

    assert_eq!(markers.len(), 9);
    assert_eq!(markers[0], PageMarker::PreviousLink { target: 4 });
    assert_eq!(markers.iter().filter(|m| m.is_ellipsis()).count(), 2);
}

#[wasm_bindgen_test]
fn test_compute_page_markers_rejects_invalid_input() {
    let err = compute_page_markers(5, 6, None).unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Current page 6 out of range (must be 1..=5)")
    );
}

#[wasm_bindgen_test]
fn test_build_pagination_view_links() {
    let route = Route::named("files").with_query("sort", "name");
    let value = build_pagination_view(10, 6, None, route_js(&route), JsValue::UNDEFINED).unwrap();
    let view: PaginationView = serde_wasm_bindgen::from_value(value).unwrap();

    assert!(view.prev_available);
    assert!(view.next_available);
    assert_eq!(view.items[0].to.as_ref().unwrap().page("page"), Some(5));
    assert_eq!(view.items.last().unwrap().to.as_ref().unwrap().page("page"), Some(7));
}

#[wasm_bindgen_test]
fn test_pagination_class() {
    let mut pagination =
        Pagination::create(4, 1, route_js(&Route::named("files")), JsValue::UNDEFINED).unwrap();
    pagination.set_max_displayed(Some(3));
    assert!(!pagination.is_prev_page_available());

    pagination.set_current_page(4);
    assert!(!pagination.is_next_page_available());

    pagination.set_pages(10);
    let value = pagination.view_js().unwrap();
    let view: PaginationView = serde_wasm_bindgen::from_value(value).unwrap();
    assert!(view.items.iter().any(|item| item.label == "…"));
}

#[wasm_bindgen_test]
fn test_invalid_route_is_rejected() {
    let result = build_pagination_view(3, 1, None, JsValue::from_str("files"), JsValue::UNDEFINED);
    assert!(result.is_err());
}
