//! Converters for the fauskekino.no program and culture API dumps.
//!
//! Inputs are the raw wrappers written by the fetch step,
//! `{ "lastUpdated": ..., "raw": { ...api response... } }`; a document
//! without `raw` is taken to be the API response itself.

use serde_json::Value;

pub mod culture;
pub mod films;
pub mod program;
pub mod sanity;

pub use culture::{build_culture_program, CultureEvent, CultureProgram, CultureShow};
pub use films::{build_films, Film, FilmCatalog};
pub use program::{build_program, KinoProgram, ProgramMovie, ProgramShow};

/// The API payload inside a raw wrapper.
pub fn raw_payload(document: &Value) -> &Value {
    document.get("raw").unwrap_or(document)
}

/// Elements of the array at `key`, or nothing if absent or not an array.
pub(crate) fn array_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Non-empty string at `key`.
pub(crate) fn str_at(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Identifier at `key`, accepting numeric ids as well as strings.
pub(crate) fn id_at(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Value at `key`, `null` when absent.
pub(crate) fn value_at(value: &Value, key: &str) -> Value {
    value.get(key).cloned().unwrap_or(Value::Null)
}
