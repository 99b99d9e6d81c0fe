//! plainval: small pure helpers for plain JSON-shaped data.
//!
//! Values are `serde_json::Value` trees. Every helper takes its inputs by
//! reference, returns a fresh value, and never mutates what it was given:
//! - `predicates`/`kind`: classify values (`exists`, `is_nil_or_empty`, `has_deep`, ...)
//! - `object`: project and rename (`pick_deep`, `all_keys_containing`, `rename_keys`, ...)
//! - `list`: select records by a field (`filter_by_id`, `merge_lists_by_prop`, ...)
//! - `strings`: case conversion and formatting (`snakeify`, `camelize`, ...)
//! - `debug`: pass-through logging for pipelines (`check`, `pretty_check`)
//! - `memo`: an explicit cache to put in front of any of the above
//!
//! Lookups that can't be resolved come back as `None` or `false` rather than
//! errors. The few genuine failures are reported through [`Error`].
//!
//! # Example
//!
//! ```rust
//! use plainval::{filter_by_prop, has_deep, path, snakeify};
//! use serde_json::json;
//!
//! let pets = json!([{"type": "dragon"}, {"type": "cat"}]);
//! assert_eq!(filter_by_prop("type", &json!("dragon"), &pets).len(), 1);
//!
//! let obj = json!({"a": {"b": {"c": "x"}}});
//! assert!(has_deep(&path!("a", "b", "c"), &obj));
//!
//! assert_eq!(snakeify("MozTransform"), "moz_transform");
//! ```

mod bytes;
mod debug;
mod defaults;
mod error;
mod kind;
mod list;
mod memo;
mod object;
mod path;
mod predicates;
mod strings;
pub mod value_utils;

pub use bytes::parse_hex_binary;
pub use debug::{check, pretty_check, tap};
pub use defaults::{
    default_to_empty_array, default_to_empty_object, default_to_empty_string, empty_array,
    empty_object, empty_string, prop_or_empty_object, prop_or_empty_string,
};
pub use error::{Error, Result};
pub use kind::{is_array, is_bool, is_nil, is_number, is_object, is_string, kind_of, type_is, Kind};
pub use list::{
    drop_by_id, drop_by_name, drop_by_prop, filter_by_id, filter_by_name, filter_by_prop,
    find_by_id, find_by_name, find_by_prop, merge_lists_by_prop, prop_eq, AsRecords,
};
pub use memo::Memo;
pub use object::{
    all_keys_containing, flatten, flatten_with, map_keys, pick, pick_deep, rename_keys,
};
pub use path::Path;
pub use predicates::{
    any_prop_satisfies, at_least, at_most, between, contains_all, exists, greater_than,
    has_deep, is_empty, is_nil_or_empty, is_not_empty, less_than,
};
pub use strings::{
    append_str, build_query_string, camelize, first_char_is, insert_commas_in_number,
    make_matchers, snakeify, NumberText,
};
