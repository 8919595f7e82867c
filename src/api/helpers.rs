//! Shared helpers for WASM API operations
//!
//! Logging, serialization and error conversion used by every exported
//! function.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::pagination::PaginationError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        to_js_error(PaginationError::InvalidOptions(format!("{}: {}", error_context, e)))
    })
}

/// Deserialize a value that JavaScript may leave out (`undefined` / `null`)
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript
///
/// Uses the JSON-compatible serializer so maps arrive as plain objects
/// (`route.query.page`) rather than ES `Map`s.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let msg = format!("{}: {}", error_context, e);
            wasm_error!("{}", msg);
            JsValue::from_str(&msg)
        })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a pagination error to a JsValue, logging it first
pub fn to_js_error(err: PaginationError) -> JsValue {
    let msg = err.to_string();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
