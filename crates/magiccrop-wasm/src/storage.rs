//! Storage naming WASM bindings.
//!
//! The upload client names objects `<epoch-ms>-<original-name>`; the
//! history view filters a listing back down by that prefix. Both sides of
//! the convention live in core so they cannot drift.

use js_sys::Array;
use magiccrop_core::storage;
use wasm_bindgen::prelude::*;

/// Build the storage object name for an upload.
///
/// # Arguments
///
/// * `now_ms` - Client epoch timestamp in milliseconds (`Date.now()`)
/// * `file_name` - The original file name, kept verbatim after the prefix
#[wasm_bindgen]
pub fn object_name(now_ms: f64, file_name: &str) -> String {
    storage::object_name(now_ms as i64, file_name)
}

/// Filter storage object names down to uploads within the last `hours`
/// hours.
///
/// Names without a parseable timestamp prefix are skipped; the bucket may
/// contain objects written by other tooling.
///
/// # Arguments
///
/// * `names` - Object names from the storage listing
/// * `now_ms` - Client epoch timestamp in milliseconds (`Date.now()`)
/// * `hours` - Size of the history window
///
/// # Example
///
/// ```typescript
/// const recent = filter_recent_uploads(listing.map(o => o.name), Date.now(), 24);
/// ```
#[wasm_bindgen]
pub fn filter_recent_uploads(names: Vec<String>, now_ms: f64, hours: u32) -> Array {
    storage::filter_recent(names.iter().map(String::as_str), now_ms as i64, hours as i64)
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}
