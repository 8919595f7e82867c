//! Pagination options passed in from the host
//!
//! All fields have defaults, so an empty object (or no object at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use super::page_set::DisplayConstraint;
use crate::pagination::PaginationError;

pub const DEFAULT_PAGE_QUERY_PARAM: &str = "page";
pub const DEFAULT_ELLIPSIS_LABEL: &str = "…";
pub const DEFAULT_PREVIOUS_LABEL: &str = "Previous page";
pub const DEFAULT_NEXT_LABEL: &str = "Next page";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationOptions {
    /// Window size; `None` shows every page
    pub max_displayed: Option<u32>,

    /// Query parameter that carries the page number in link targets
    pub page_query_param: String,

    pub ellipsis_label: String,
    pub previous_label: String,
    pub next_label: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            max_displayed: None,
            page_query_param: DEFAULT_PAGE_QUERY_PARAM.to_string(),
            ellipsis_label: DEFAULT_ELLIPSIS_LABEL.to_string(),
            previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
        }
    }
}

impl PaginationOptions {
    pub fn with_max_displayed(mut self, max_displayed: Option<u32>) -> Self {
        self.max_displayed = max_displayed;
        self
    }

    /// Validated display constraint for these options
    pub fn constraint(&self) -> Result<DisplayConstraint, PaginationError> {
        DisplayConstraint::new(self.max_displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options: PaginationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PaginationOptions::default());
        assert_eq!(options.page_query_param, "page");
    }

    #[test]
    fn test_camel_case_fields() {
        let options: PaginationOptions =
            serde_json::from_str(r#"{"maxDisplayed": 3, "pageQueryParam": "p"}"#).unwrap();
        assert_eq!(options.max_displayed, Some(3));
        assert_eq!(options.page_query_param, "p");
        assert_eq!(options.ellipsis_label, DEFAULT_ELLIPSIS_LABEL);
    }

    #[test]
    fn test_constraint_rejects_zero() {
        let options = PaginationOptions::default().with_max_displayed(Some(0));
        assert_eq!(options.constraint(), Err(PaginationError::InvalidMaxDisplayed));
    }
}
