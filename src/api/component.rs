//! Stateful pagination component exported to JavaScript
//!
//! Holds the component's props the way a UI framework does: each prop can
//! be updated on its own, and the view is recomputed from the current
//! props when asked for. Intermediate prop combinations may be invalid
//! (e.g. shrinking `pages` before moving `currentPage`); only `view`
//! reports them.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, to_js_error};
use super::types::PaginationView;
use crate::models::{DisplayConstraint, PageSet, PaginationOptions, Route};
use crate::pagination::{compute_markers, PaginationError};
use crate::wasm_log;

#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct Pagination {
    pages: u32,
    current_page: u32,
    current_route: Route,
    options: PaginationOptions,
}

#[wasm_bindgen]
impl Pagination {
    /// Create a pagination component
    ///
    /// `route_js` is the hosting application's current route; `options_js`
    /// may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn create(
        pages: u32,
        current_page: u32,
        route_js: JsValue,
        options_js: JsValue,
    ) -> Result<Pagination, JsValue> {
        let route = deserialize(route_js, "Failed to deserialize route")?;
        let options =
            deserialize_or_default(options_js, "Failed to deserialize pagination options")?;
        Ok(Self::new(pages, current_page, route, options))
    }

    #[wasm_bindgen(getter)]
    pub fn pages(&self) -> u32 {
        self.pages
    }

    #[wasm_bindgen(setter)]
    pub fn set_pages(&mut self, pages: u32) {
        self.pages = pages;
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[wasm_bindgen(setter, js_name = currentPage)]
    pub fn set_current_page(&mut self, current_page: u32) {
        self.current_page = current_page;
    }

    #[wasm_bindgen(getter, js_name = maxDisplayed)]
    pub fn max_displayed(&self) -> Option<u32> {
        self.options.max_displayed
    }

    #[wasm_bindgen(setter, js_name = maxDisplayed)]
    pub fn set_max_displayed(&mut self, max_displayed: Option<u32>) {
        self.options.max_displayed = max_displayed;
    }

    #[wasm_bindgen(js_name = setCurrentRoute)]
    pub fn set_current_route_js(&mut self, route_js: JsValue) -> Result<(), JsValue> {
        self.current_route = deserialize(route_js, "Failed to deserialize route")?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isPrevPageAvailable)]
    pub fn is_prev_page_available(&self) -> bool {
        self.current_page > 1
    }

    #[wasm_bindgen(js_name = isNextPageAvailable)]
    pub fn is_next_page_available(&self) -> bool {
        self.current_page < self.pages
    }

    /// Current `PaginationView` as a JavaScript object
    #[wasm_bindgen(js_name = view)]
    pub fn view_js(&self) -> Result<JsValue, JsValue> {
        let view = self.view().map_err(to_js_error)?;
        serialize(&view, "Failed to serialize pagination view")
    }
}

impl Pagination {
    pub fn new(
        pages: u32,
        current_page: u32,
        current_route: Route,
        options: PaginationOptions,
    ) -> Self {
        Self {
            pages,
            current_page,
            current_route,
            options,
        }
    }

    pub fn set_current_route(&mut self, route: Route) {
        self.current_route = route;
    }

    pub fn current_route(&self) -> &Route {
        &self.current_route
    }

    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Recompute the view from the current props
    ///
    /// # Errors
    /// Returns a [`PaginationError`] if the props are not a valid combination.
    pub fn view(&self) -> Result<PaginationView, PaginationError> {
        let pages = PageSet::new(self.pages, self.current_page)?;
        let constraint: DisplayConstraint = self.options.constraint()?;

        wasm_log!(
            "Pagination view: page {}/{}, maxDisplayed={:?}",
            self.current_page,
            self.pages,
            constraint.max_displayed()
        );

        let markers = compute_markers(&pages, &constraint);
        Ok(PaginationView::build(&markers, &self.current_route, &self.options))
    }
}
