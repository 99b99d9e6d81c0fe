//! Navigation over `serde_json::Value` trees.
//!
//! Lookups here are total: anything that cannot be walked (a missing key, a
//! primitive in the way, an array index that does not parse or is out of
//! bounds) resolves to `None` instead of an error.

use serde_json::Value as JsonValue;

use crate::path::Path;

/// Get a reference to the sub-tree at `path`, or `None` if it can't be reached.
///
/// The empty path resolves to `tree` itself.
pub fn get_path<'tree>(tree: &'tree JsonValue, path: &Path) -> Option<&'tree JsonValue> {
    let mut cursor = tree;
    for component in path.iter() {
        cursor = get_child(cursor, component)?;
    }
    Some(cursor)
}

/// Get a single child of an object (by key) or array (by index).
pub fn get_child<'tree>(tree: &'tree JsonValue, component: &str) -> Option<&'tree JsonValue> {
    match tree {
        JsonValue::Object(map) => map.get(component),
        JsonValue::Array(arr) => {
            let index = component.parse::<usize>().ok()?;
            arr.get(index)
        }
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
            None
        }
    }
}

/// Get the field `key` of a record. Non-objects have no fields.
pub fn get_prop<'tree>(record: &'tree JsonValue, key: &str) -> Option<&'tree JsonValue> {
    record.as_object().and_then(|map| map.get(key))
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
///
/// Everything else follows `Value`'s own equality: types must match and
/// object key order is irrelevant.
pub fn values_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => numbers_equal(x, y),
        (JsonValue::Array(xs), JsonValue::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (JsonValue::Object(xs), JsonValue::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &serde_json::Number, y: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
