//! Opt-in memoization for pure functions.
//!
//! Nothing in this crate memoizes on its own. Wrap a function in [`Memo`]
//! when repeated calls with equal arguments are worth caching, and own the
//! cache's lifetime and size explicitly.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// A cache in front of a pure function.
///
/// Arguments are keyed by their `serde_json` serialization with object keys
/// sorted, so two arguments that serialize to the same JSON (in any key
/// order) share a cache entry.
///
/// ```rust
/// use plainval::Memo;
///
/// let mut len = Memo::new(|s: &String| s.len());
/// assert_eq!(len.call(&"four".to_string()).unwrap(), 4);
/// assert_eq!(len.len(), 1);
/// ```
pub struct Memo<A, R, F>
where
    F: Fn(&A) -> R,
{
    f: F,
    cache: HashMap<String, R>,
    capacity: Option<usize>,
    _arg: PhantomData<fn(&A)>,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap `f` with an unbounded cache.
    pub fn new(f: F) -> Self {
        Self {
            f,
            cache: HashMap::new(),
            capacity: None,
            _arg: PhantomData,
        }
    }

    /// Wrap `f` with a cache holding at most `capacity` entries.
    ///
    /// A full cache is emptied before the next insert. A capacity of zero
    /// disables caching.
    pub fn with_capacity(f: F, capacity: usize) -> Self {
        Self {
            f,
            cache: HashMap::new(),
            capacity: Some(capacity),
            _arg: PhantomData,
        }
    }

    /// Return the cached result for `arg`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::Json`] if `arg` can't be serialized into a
    /// cache key.
    pub fn call(&mut self, arg: &A) -> Result<R> {
        let key = cache_key(arg)?;
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let result = (self.f)(arg);
        match self.capacity {
            Some(0) => {}
            Some(capacity) if self.cache.len() >= capacity => {
                log::debug!("memo cache full at {} entries, clearing", capacity);
                self.cache.clear();
                self.cache.insert(key, result.clone());
            }
            _ => {
                self.cache.insert(key, result.clone());
            }
        }
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

fn cache_key<A: Serialize>(arg: &A) -> Result<String> {
    let value = sort_keys(serde_json::to_value(arg)?);
    Ok(serde_json::to_string(&value)?)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
