//! Lenient lookups over loosely-typed response records.
//!
//! Upstream responses are plain JSON objects whose shape is not enforced.
//! Every accessor here falls back to a default instead of failing: a
//! non-object record behaves like an empty one, and a field of the wrong
//! type behaves like a missing one.

use serde_json::Value;

use crate::display::display;

static NULL: Value = Value::Null;

/// Get the value under `key`, if `record` is an object holding it
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.as_object().and_then(|map| map.get(key))
}

/// Nested record under `key`; `null` (an empty record) when absent
pub fn nested<'a>(record: &'a Value, key: &str) -> &'a Value {
    field(record, key).unwrap_or(&NULL)
}

/// Whether `key` is present at all, even with a `null` value
pub fn has_key(record: &Value, key: &str) -> bool {
    record
        .as_object()
        .is_some_and(|map| map.contains_key(key))
}

/// Display text of a field, or `default` when absent
pub fn text_or(record: &Value, key: &str, default: &str) -> String {
    field(record, key)
        .map(display)
        .unwrap_or_else(|| default.to_string())
}

/// Array under `key`, or an empty slice
pub fn list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    field(record, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Truthiness of a field; missing counts as false
pub fn truthy(record: &Value, key: &str) -> bool {
    field(record, key).is_some_and(is_truthy)
}
