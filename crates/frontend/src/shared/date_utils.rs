//! Date formatting for table cells, export and the job form

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date part of an ISO timestamp in the user's locale.
/// Unparsable input is shown unchanged.
#[cfg(target_arch = "wasm32")]
pub fn format_local_date(value: &str) -> String {
    let Some(date) = parse_date(value) else {
        return value.to_string();
    };
    let js_date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(
        &date.format("%Y-%m-%dT00:00:00").to_string(),
    ));
    js_date
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Date part of an ISO timestamp as `M/D/YYYY`.
/// Unparsable input is shown unchanged.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_local_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Accepts RFC 3339 timestamps, naive timestamps and plain dates
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
