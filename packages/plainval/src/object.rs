//! Projections and key rewrites over objects.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::path::Path;
use crate::value_utils;

/// Keep only `keys` from an object.
///
/// Keys missing from `obj` are skipped. Arrays are picked by index and the
/// result is still an object (`{"0": ...}`); primitives yield `{}`.
pub fn pick<K: AsRef<str>>(keys: &[K], obj: &Value) -> Value {
    let mut picked = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(v) = value_utils::get_child(obj, key) {
            picked.insert(key.to_string(), v.clone());
        }
    }
    Value::Object(picked)
}

/// Reach into `obj` at `path` and return `{last_component: value}`.
///
/// When `keys_to_keep` is non-empty and the value found is an object or
/// array, only those keys survive. An empty `keys_to_keep` keeps the value
/// as it is. A path that can't be resolved produces `{last_component: null}`.
///
/// ```rust
/// use plainval::{path, pick_deep};
/// use serde_json::json;
///
/// let obj = json!({"a": {"b": {"x": 1, "y": 2, "z": 3}}});
/// let picked = pick_deep(&path!("a", "b"), &["x", "y"], &obj).unwrap();
/// assert_eq!(picked, json!({"b": {"x": 1, "y": 2}}));
/// ```
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] on an empty path, since there is
/// no key to wrap the result under.
pub fn pick_deep<K: AsRef<str>>(path: &Path, keys_to_keep: &[K], obj: &Value) -> Result<Value> {
    let last = path.last().ok_or_else(|| Error::empty_path("pick_deep"))?;

    let found = match value_utils::get_path(obj, path) {
        Some(found) => found,
        None => {
            log::debug!("pick_deep: nothing at {}", path);
            &Value::Null
        }
    };

    let projected = match found {
        Value::Object(_) | Value::Array(_) if !keys_to_keep.is_empty() => {
            pick(keys_to_keep, found)
        }
        _ => found.clone(),
    };

    let mut wrapped = Map::new();
    wrapped.insert(last.to_string(), projected);
    Ok(Value::Object(wrapped))
}

/// Flatten nested objects and arrays into `.`-joined leaf keys.
pub fn flatten(obj: &Value) -> Map<String, Value> {
    flatten_with(obj, ".")
}

/// Flatten nested objects and arrays, joining keys with `delimiter`.
///
/// Array elements use their index as key. Empty nested containers are kept
/// as leaves so no information is lost. A primitive at the top level has no
/// keys and flattens to an empty map.
pub fn flatten_with(obj: &Value, delimiter: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    if matches!(obj, Value::Object(_) | Value::Array(_)) {
        flatten_into(obj, None, delimiter, &mut flat);
    }
    flat
}

fn flatten_into(
    value: &Value,
    prefix: Option<&str>,
    delimiter: &str,
    flat: &mut Map<String, Value>,
) {
    let children: Vec<(String, &Value)> = match value {
        Value::Object(map) if !map.is_empty() => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(arr) if !arr.is_empty() => arr
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => {
            if let Some(prefix) = prefix {
                flat.insert(prefix.to_string(), value.clone());
            }
            return;
        }
    };

    for (key, child) in children {
        let full_key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, delimiter, key),
            None => key,
        };
        flatten_into(child, Some(&full_key), delimiter, flat);
    }
}

/// Flattened entries of `obj` whose dotted key contains `substring`.
///
/// ```rust
/// use plainval::all_keys_containing;
/// use serde_json::json;
///
/// let obj = json!({"dragon": true, "b": true, "d": {"super_dragon": true}});
/// assert_eq!(
///     all_keys_containing("dragon", &obj),
///     json!({"dragon": true, "d.super_dragon": true})
/// );
/// ```
pub fn all_keys_containing(substring: &str, obj: &Value) -> Value {
    Value::Object(
        flatten(obj)
            .into_iter()
            .filter(|(key, _)| key.contains(substring))
            .collect(),
    )
}

/// Rename top-level keys of `obj` through `rename_map`.
///
/// Keys without an entry, or whose entry is the empty string, keep their
/// name. Values are copied as they are. Non-objects have no keys and yield
/// `{}`.
pub fn rename_keys(rename_map: &BTreeMap<String, String>, obj: &Value) -> Value {
    map_keys(
        |key| match rename_map.get(key) {
            Some(renamed) if !renamed.is_empty() => renamed.clone(),
            _ => key.to_string(),
        },
        obj,
    )
}

/// Apply `f` to every top-level key of `obj`.
///
/// If `f` maps two keys to the same name, the one visited later wins. Keys
/// are visited in the object's iteration order.
pub fn map_keys<F>(f: F, obj: &Value) -> Value
where
    F: Fn(&str) -> String,
{
    let mut mapped = Map::new();
    if let Value::Object(map) = obj {
        for (key, value) in map {
            mapped.insert(f(key), value.clone());
        }
    }
    Value::Object(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use collection_literals::btree;
    use serde_json::json;

    fn deep_obj() -> Value {
        json!({
            "one": 1,
            "two": 2,
            "deepObj": {
                "deeperObj": {"three": 3, "four": 4, "five": 5},
            },
        })
    }

    #[test]
    fn pick_skips_missing_keys() {
        let obj = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(pick(&["a", "c", "z"], &obj), json!({"a": 1, "c": 3}));
        assert_eq!(pick(&["a"], &json!(true)), json!({}));
        assert_eq!(pick(&["1"], &json!(["x", "y"])), json!({"1": "y"}));
    }

    #[test]
    fn pick_deep_with_pick_list() {
        let result = pick_deep(
            &path!("deepObj", "deeperObj"),
            &["three", "four"],
            &deep_obj(),
        );
        assert_eq!(
            result.unwrap(),
            json!({"deeperObj": {"three": 3, "four": 4}})
        );
    }

    #[test]
    fn pick_deep_with_empty_pick_list_keeps_object() {
        let keys: [&str; 0] = [];
        let obj = deep_obj();
        let result = pick_deep(&path!("deepObj", "deeperObj"), &keys, &obj).unwrap();
        assert_eq!(result, obj["deepObj"]);
    }

    #[test]
    fn pick_deep_with_empty_pick_list_keeps_primitive() {
        let keys: [&str; 0] = [];
        let obj = json!({"one": 1, "deepObj": {"deeperObj": true}});
        let result = pick_deep(&path!("deepObj", "deeperObj"), &keys, &obj).unwrap();
        assert_eq!(result, json!({"deeperObj": true}));
    }

    #[test]
    fn pick_deep_ignores_pick_list_for_primitives() {
        let obj = json!({"a": {"b": "leaf"}});
        let result = pick_deep(&path!("a", "b"), &["x"], &obj).unwrap();
        assert_eq!(result, json!({"b": "leaf"}));
    }

    #[test]
    fn pick_deep_unresolved_path_is_null() {
        let result = pick_deep(&path!("deepObj", "missing"), &["x"], &deep_obj()).unwrap();
        assert_eq!(result, json!({"missing": null}));
    }

    #[test]
    fn pick_deep_empty_path_is_invalid() {
        let err = pick_deep(&path!(), &["x"], &deep_obj()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn flatten_nested_objects_and_arrays() {
        let obj = json!({
            "a": {"b": {"c": 1}},
            "list": [10, {"x": true}],
            "empty": {},
            "none": [],
            "top": "t",
        });
        let flat = flatten(&obj);
        assert_eq!(
            Value::Object(flat),
            json!({
                "a.b.c": 1,
                "list.0": 10,
                "list.1.x": true,
                "empty": {},
                "none": [],
                "top": "t",
            })
        );
    }

    #[test]
    fn flatten_with_custom_delimiter() {
        let flat = flatten_with(&json!({"a": {"b": 1}}), "/");
        assert_eq!(flat.get("a/b"), Some(&json!(1)));
    }

    #[test]
    fn flatten_primitive_is_empty() {
        assert!(flatten(&json!(5)).is_empty());
    }

    #[test]
    fn all_keys_containing_dragon() {
        let obj = json!({
            "dragon": true,
            "b": true,
            "c": true,
            "d": {"super_dragon": true},
            "e": {"c": {"string_dragon_of_yore": true}},
            "f": {"g": {"h": {"deep_dragon": false}}},
        });
        assert_eq!(
            all_keys_containing("dragon", &obj),
            json!({
                "dragon": true,
                "d.super_dragon": true,
                "e.c.string_dragon_of_yore": true,
                "f.g.h.deep_dragon": false,
            })
        );
    }

    #[test]
    fn rename_keys_renames_mapped_keys_only() {
        let rename_map = btree! {
            "three".to_string() => "wigglesaurus".to_string(),
        };
        let obj = json!({"one": 1, "two": 2, "three": 3});
        assert_eq!(
            rename_keys(&rename_map, &obj),
            json!({"one": 1, "two": 2, "wigglesaurus": 3})
        );
    }

    #[test]
    fn rename_keys_with_empty_map_is_identity() {
        let obj = json!({"one": 1, "nested": {"two": 2}});
        assert_eq!(rename_keys(&BTreeMap::new(), &obj), obj);
    }

    #[test]
    fn rename_keys_empty_target_keeps_name() {
        let rename_map = btree! { "one".to_string() => String::new() };
        assert_eq!(rename_keys(&rename_map, &json!({"one": 1})), json!({"one": 1}));
    }

    #[test]
    fn map_keys_applies_function() {
        let obj = json!({"a": 1, "b": 2});
        assert_eq!(map_keys(|k| k.to_uppercase(), &obj), json!({"A": 1, "B": 2}));
    }

    #[test]
    fn map_keys_collision_follows_insertion_order() {
        let obj: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        assert_eq!(map_keys(|_| "same".to_string(), &obj), json!({"same": 2}));
    }

    #[test]
    fn rename_keys_keeps_key_order() {
        let obj: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let rename_map = btree! { "alpha".to_string() => "beta".to_string() };
        let renamed = rename_keys(&rename_map, &obj);
        let keys: Vec<&String> = renamed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "beta", "mid"]);
    }

    #[test]
    fn map_keys_collision_later_key_wins() {
        let obj = json!({"a": 1, "b": 2});
        assert_eq!(map_keys(|_| "same".to_string(), &obj), json!({"same": 2}));
    }
}
