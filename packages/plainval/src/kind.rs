//! Closed type tags for plain values.

use serde_json::Value;

/// The shape of a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// Whether `value` has the given kind.
///
/// ```rust
/// use plainval::{type_is, Kind};
/// use serde_json::json;
///
/// assert!(type_is(Kind::String, &json!("i AM a string")));
/// assert!(!type_is(Kind::Object, &json!("i AM a string")));
/// ```
pub fn type_is(kind: Kind, value: &Value) -> bool {
    kind_of(value) == kind
}

pub fn is_nil(value: &Value) -> bool {
    value.is_null()
}

pub fn is_bool(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

pub fn is_object(value: &Value) -> bool {
    value.is_object()
}
