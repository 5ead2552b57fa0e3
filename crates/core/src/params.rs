//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail; a missing or mistyped field yields the default.

use serde_json::Value;

/// Extracts an `i64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is an integer that fits in `i64`; floats
/// fall back to the default rather than being truncated.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    params.get(name).and_then(Value::as_i64).unwrap_or(default)
}

/// Extracts a `&str` from `params[name]`, or `None` if missing or wrong type.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}
