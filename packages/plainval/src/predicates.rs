//! Boolean classification of values.

use serde_json::Value;

use crate::path::Path;
use crate::value_utils;

/// True unless `value` is absent (`None`) or `null`.
///
/// Accepts either `&Value` or `Option<&Value>`, so the result of a lookup
/// can be passed straight in:
///
/// ```rust
/// use plainval::exists;
/// use serde_json::json;
///
/// let obj = json!({"a": 0, "b": null});
/// assert!(exists(&obj["a"]));
/// assert!(!exists(obj.get("b")));
/// assert!(!exists(obj.get("c")));
/// ```
pub fn exists<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    !matches!(value.into(), None | Some(Value::Null))
}

/// Structural emptiness: `""`, `[]` and `{}`.
///
/// `null` is not empty; it is nil. Numbers and booleans are never empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

pub fn is_not_empty(value: &Value) -> bool {
    !is_empty(value)
}

pub fn is_nil_or_empty<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    match value.into() {
        None => true,
        Some(v) => v.is_null() || is_empty(v),
    }
}

/// Whether something that [`exists`] lives at `path` inside `obj`.
///
/// Never fails: unreachable paths are simply `false`. The empty path checks
/// `obj` itself.
pub fn has_deep(path: &Path, obj: &Value) -> bool {
    exists(value_utils::get_path(obj, path))
}

/// True if any top-level value of an object (or element of an array)
/// satisfies `predicate`. Primitives have no props.
pub fn any_prop_satisfies<F>(predicate: F, obj: &Value) -> bool
where
    F: Fn(&Value) -> bool,
{
    match obj {
        Value::Object(map) => map.values().any(predicate),
        Value::Array(arr) => arr.iter().any(predicate),
        _ => false,
    }
}

/// True if every needle appears somewhere in `haystack`.
pub fn contains_all<T: PartialEq>(needles: &[T], haystack: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

/// Inclusive range check.
pub fn between<T: PartialOrd>(low: T, high: T, x: T) -> bool {
    x >= low && x <= high
}

/// `greater_than(b)(x)` is `x > b`.
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x > bound
}

/// `at_least(b)(x)` is `x >= b`.
pub fn at_least<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x >= bound
}

/// `less_than(b)(x)` is `x < b`.
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x < bound
}

/// `at_most(b)(x)` is `x <= b`.
pub fn at_most<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x <= bound
}
