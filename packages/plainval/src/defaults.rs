//! Constant empty values and fall-backs for missing ones.

use serde_json::{Map, Value};

use crate::predicates::exists;
use crate::value_utils;

pub fn empty_string() -> Value {
    Value::String(String::new())
}

pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

pub fn empty_array() -> Value {
    Value::Array(Vec::new())
}

fn default_to<'a>(value: impl Into<Option<&'a Value>>, fallback: fn() -> Value) -> Value {
    match value.into() {
        Some(v) if exists(v) => v.clone(),
        _ => fallback(),
    }
}

/// `value` if it exists, otherwise `[]`.
pub fn default_to_empty_array<'a>(value: impl Into<Option<&'a Value>>) -> Value {
    default_to(value, empty_array)
}

/// `value` if it exists, otherwise `{}`.
pub fn default_to_empty_object<'a>(value: impl Into<Option<&'a Value>>) -> Value {
    default_to(value, empty_object)
}

/// `value` if it exists, otherwise `""`.
pub fn default_to_empty_string<'a>(value: impl Into<Option<&'a Value>>) -> Value {
    default_to(value, empty_string)
}

/// The field `key` of `obj`, or `""` when it is missing or null.
pub fn prop_or_empty_string(key: &str, obj: &Value) -> Value {
    default_to(value_utils::get_prop(obj, key), empty_string)
}

/// The field `key` of `obj`, or `{}` when it is missing or null.
pub fn prop_or_empty_object(key: &str, obj: &Value) -> Value {
    default_to(value_utils::get_prop(obj, key), empty_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::is_empty;
    use serde_json::json;

    #[test]
    fn empty_constructors() {
        assert_eq!(empty_string(), json!(""));
        assert_eq!(empty_object(), json!({}));
        assert_eq!(empty_array(), json!([]));
        assert!(is_empty(&empty_object()));
    }

    #[test]
    fn default_to_passes_existing_values_through() {
        assert_eq!(default_to_empty_array(&json!([1])), json!([1]));
        assert_eq!(default_to_empty_object(&json!(false)), json!(false));
        assert_eq!(default_to_empty_string(&json!(0)), json!(0));
    }

    #[test]
    fn default_to_replaces_null_and_absent() {
        assert_eq!(default_to_empty_array(None), json!([]));
        assert_eq!(default_to_empty_object(&json!(null)), json!({}));
        assert_eq!(default_to_empty_string(None), json!(""));
    }

    #[test]
    fn prop_or_empty_string_lookup() {
        let obj = json!({"name": "Bob", "nothing": null});
        assert_eq!(prop_or_empty_string("name", &obj), json!("Bob"));
        assert_eq!(prop_or_empty_string("missing", &obj), json!(""));
        assert_eq!(prop_or_empty_string("nothing", &obj), json!(""));
        assert_eq!(prop_or_empty_string("name", &json!({})), json!(""));
    }

    #[test]
    fn prop_or_empty_object_lookup() {
        let obj = json!({"config": {"debug": true}});
        assert_eq!(prop_or_empty_object("config", &obj), json!({"debug": true}));
        assert_eq!(prop_or_empty_object("other", &obj), json!({}));
    }
}
