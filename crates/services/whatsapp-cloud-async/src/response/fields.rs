//! Best-effort field extraction
//!
//! A recognized payload is mapped through a table of `(wire key, setter)` pairs.
//! A missing or mistyped field leaves the target field at its default instead of
//! failing the whole parse.

use serde_json::Value;

/// Writes one wire value into the target
pub(crate) type FieldSetter<T> = fn(&mut T, &Value);

/// Applies every setter whose key is present (and non-null) in `obj`
pub(crate) fn map_fields<T: Default>(obj: &Value, table: &[(&str, FieldSetter<T>)]) -> T {
    let mut target = T::default();
    for (key, set) in table {
        if let Some(value) = obj.get(key).filter(|v| !v.is_null()) {
            set(&mut target, value);
        }
    }
    target
}

/// `true` when `key` exists and is not null
pub(crate) fn has_key(obj: &Value, key: &str) -> bool {
    obj.get(key).is_some_and(|v| !v.is_null())
}

/// Strings as-is; numbers and booleans rendered (Graph ids are sometimes numeric)
pub(crate) fn string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integers, including integers encoded as strings
pub(crate) fn int(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

/// Non-negative integers, including integers encoded as strings
pub(crate) fn uint(v: &Value) -> Option<u64> {
    v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

/// Booleans, including `"true"`/`"false"` strings
pub(crate) fn boolean(v: &Value) -> Option<bool> {
    v.as_bool().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

/// Array of scalars rendered as strings; objects and arrays are skipped
pub(crate) fn strings(v: &Value) -> Vec<String> {
    v.as_array()
        .map(|items| items.iter().filter_map(string).collect())
        .unwrap_or_default()
}

/// Array of objects mapped through `f`; a non-array yields an empty list
pub(crate) fn list<T>(v: &Value, f: impl Fn(&Value) -> T) -> Vec<T> {
    v.as_array()
        .map(|items| items.iter().map(f).collect())
        .unwrap_or_default()
}
