//! Lookups over lists of records by a named field.
//!
//! A record is a JSON object. Elements that are not objects never match a
//! field comparison. Lists may be passed as slices, vectors, JSON arrays, or
//! wrapped in `Option`; a missing list behaves like an empty one.

use serde_json::Value;

use crate::value_utils;

/// Anything that can be viewed as a borrowed list of records.
pub trait AsRecords<'a> {
    fn records(self) -> &'a [Value];
}

impl<'a> AsRecords<'a> for &'a [Value] {
    fn records(self) -> &'a [Value] {
        self
    }
}

impl<'a> AsRecords<'a> for &'a Vec<Value> {
    fn records(self) -> &'a [Value] {
        self.as_slice()
    }
}

impl<'a, const N: usize> AsRecords<'a> for &'a [Value; N] {
    fn records(self) -> &'a [Value] {
        self.as_slice()
    }
}

/// A JSON array is its elements; `null` and every other value is empty.
impl<'a> AsRecords<'a> for &'a Value {
    fn records(self) -> &'a [Value] {
        self.as_array().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<'a, L: AsRecords<'a>> AsRecords<'a> for Option<L> {
    fn records(self) -> &'a [Value] {
        self.map(AsRecords::records).unwrap_or(&[])
    }
}

/// Build a predicate that is true for records whose field `key` equals
/// `value`.
///
/// Equality is strict: `1` and `"1"` differ, and a record without the field
/// never matches. Numbers compare by value, so `1` and `1.0` are equal.
pub fn prop_eq<'a>(key: &'a str, value: &'a Value) -> impl Fn(&Value) -> bool + 'a {
    move |record| {
        value_utils::get_prop(record, key).is_some_and(|v| value_utils::values_equal(v, value))
    }
}

pub fn filter_by_prop<'a>(key: &str, value: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    let matches = prop_eq(key, value);
    list.records().iter().filter(|r| matches(*r)).collect()
}

pub fn find_by_prop<'a>(key: &str, value: &Value, list: impl AsRecords<'a>) -> Option<&'a Value> {
    let matches = prop_eq(key, value);
    list.records().iter().find(|r| matches(*r))
}

pub fn drop_by_prop<'a>(key: &str, value: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    let matches = prop_eq(key, value);
    list.records().iter().filter(|r| !matches(*r)).collect()
}

pub fn filter_by_id<'a>(id: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    filter_by_prop("id", id, list)
}

pub fn find_by_id<'a>(id: &Value, list: impl AsRecords<'a>) -> Option<&'a Value> {
    find_by_prop("id", id, list)
}

pub fn drop_by_id<'a>(id: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    drop_by_prop("id", id, list)
}

pub fn filter_by_name<'a>(name: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    filter_by_prop("name", name, list)
}

pub fn find_by_name<'a>(name: &Value, list: impl AsRecords<'a>) -> Option<&'a Value> {
    find_by_prop("name", name, list)
}

pub fn drop_by_name<'a>(name: &Value, list: impl AsRecords<'a>) -> Vec<&'a Value> {
    drop_by_prop("name", name, list)
}

/// Join `source` against `search` on `field`.
///
/// The output has exactly one slot per `source` record, in `source` order.
/// A slot holds the shallow merge of the source record and the first
/// `search` record with an equal `field` (search fields win on conflict), or
/// `None` when there is no such record. Source records lacking `field`, or
/// not being objects at all, get `None`.
///
/// ```rust
/// use plainval::merge_lists_by_prop;
/// use serde_json::json;
///
/// let source = json!([{"id": 1, "a": true}, {"id": 9, "a": true}]);
/// let search = json!([{"id": 1, "b": 2}]);
/// assert_eq!(
///     merge_lists_by_prop("id", &source, &search),
///     vec![Some(json!({"id": 1, "a": true, "b": 2})), None]
/// );
/// ```
pub fn merge_lists_by_prop<'a, 'b>(
    field: &str,
    source: impl AsRecords<'a>,
    search: impl AsRecords<'b>,
) -> Vec<Option<Value>> {
    let search = search.records();

    source
        .records()
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let merged = merge_with_match(field, record, search);
            if merged.is_none() {
                log::trace!("merge_lists_by_prop: no {} match for source #{}", field, position);
            }
            merged
        })
        .collect()
}

fn merge_with_match(field: &str, record: &Value, search: &[Value]) -> Option<Value> {
    let source = record.as_object()?;
    let key = source.get(field)?;
    let found = find_by_prop(field, key, search)?.as_object()?;

    let mut merged = source.clone();
    for (k, v) in found {
        merged.insert(k.clone(), v.clone());
    }
    Some(Value::Object(merged))
}
