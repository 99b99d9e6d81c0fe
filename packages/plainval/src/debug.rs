//! Pass-through helpers for peeking at values mid-pipeline.
//!
//! Output goes to the `log` facade under the `plainval::check` target, so it
//! shows up wherever the host application routes its logs.

use std::fmt::Debug;

use serde::Serialize;

const CHECK_TARGET: &str = "plainval::check";

/// Run `f` against `value` and hand `value` back.
pub fn tap<T, F>(value: T, f: F) -> T
where
    F: FnOnce(&T),
{
    f(&value);
    value
}

/// Log `value` with its `Debug` form and return it unchanged.
pub fn check<T: Debug>(value: T) -> T {
    tap(value, |v| log::info!(target: CHECK_TARGET, "{:?}", v))
}

/// Log `value` as pretty-printed JSON and return it unchanged.
///
/// Values that fail to serialize are logged with their `Debug` form instead.
pub fn pretty_check<T: Serialize + Debug>(value: T) -> T {
    tap(value, |v| match serde_json::to_string_pretty(v) {
        Ok(pretty) => log::info!(target: CHECK_TARGET, "{}", pretty),
        Err(e) => log::info!(target: CHECK_TARGET, "{:?} (not serializable: {})", v, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn tap_runs_side_effect_and_returns_input() {
        let seen = RefCell::new(Vec::new());
        let out = tap(3, |v| seen.borrow_mut().push(*v));
        assert_eq!(out, 3);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn check_is_identity() {
        let v = json!({"a": [1, 2, 3]});
        assert_eq!(check(v.clone()), v);
        assert_eq!(check("plain"), "plain");
    }

    #[test]
    fn pretty_check_is_identity() {
        let v = json!({"nested": {"deep": true}});
        assert_eq!(pretty_check(v.clone()), v);
    }

    #[test]
    fn checks_compose_in_a_pipeline() {
        let total: i32 = check(vec![1, 2, 3]).into_iter().map(check).sum();
        assert_eq!(total, 6);
    }
}
