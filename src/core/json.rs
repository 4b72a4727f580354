// src/core/json.rs
// Optional-field accessors over the untyped store tree.
//
// Nothing in the store is guaranteed: any key may be missing, null, or hold
// a different type than last week. Every read goes through one of these and
// falls back to a default instead of failing.

use serde_json::{Map, Value};

/// Walk nested object keys. `None` as soon as a step is missing or not an object.
pub fn path<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(root, |node, key| node.as_object()?.get(*key))
}

/// Like `path`, but starting from an optional node.
pub fn get<'a>(node: Option<&'a Value>, keys: &[&str]) -> Option<&'a Value> {
    path(node?, keys)
}

/// Stringify scalars; `None` for absent, null, arrays and objects.
pub fn stringify(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Stringified scalar, or `default` when absent/null/non-scalar.
/// A present empty string stays empty.
pub fn string_or(v: Option<&Value>, default: &str) -> String {
    stringify(v).unwrap_or_else(|| s!(default))
}

/// Stringified scalar, but only when non-empty.
pub fn non_empty_string(v: Option<&Value>) -> Option<String> {
    stringify(v).filter(|s| !s.is_empty())
}

/// Borrow a JSON string only when it is a non-empty string value.
pub fn non_empty_str(v: Option<&Value>) -> Option<&str> {
    v?.as_str().filter(|s| !s.is_empty())
}

/// Integer value of a JSON number (fractions truncate), else `default`.
pub fn int_or(v: Option<&Value>, default: i32) -> i32 {
    match v {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(|i| i.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .unwrap_or(default),
        _ => default,
    }
}

/// Array items, or an empty slice when absent or not an array.
pub fn array(v: Option<&Value>) -> &[Value] {
    v.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

pub fn object(v: Option<&Value>) -> Option<&Map<String, Value>> {
    v?.as_object()
}

/// JavaScript-style truthiness, used where the site's own client uses it.
pub fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
