//! Navigation target descriptor
//!
//! Mirrors the shape of a router location as the hosting application hands
//! it over. Pagination never navigates; it only derives new locations that
//! differ from the current one in a single query parameter.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Location of the page hosting the pagination control
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,

    /// Query values are kept as-is (strings, numbers, arrays)
    #[serde(default)]
    pub query: BTreeMap<String, Value>,
}

impl Route {
    /// Route identified by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Route identified by path
    pub fn at_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Copy of this route whose query carries `page` under `param`
    pub fn with_page(&self, param: &str, page: u32) -> Route {
        self.clone().with_query(param, page)
    }

    /// Page number stored under `param`, accepting numbers and numeric strings
    pub fn page(&self, param: &str) -> Option<u32> {
        match self.query.get(param)? {
            // Numbers coming from JavaScript may arrive as floats
            Value::Number(n) => n
                .as_u64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                        .map(|f| f as u64)
                })
                .and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
