//! Value transforms over records
//!
//! [`map_obj`] is `map` for records: the key set and order are kept, every value
//! is replaced by the transform's result. The transform sees the value, its key
//! and the whole source record, and may change the value type.

use crate::record::Record;

/// Pure: Create a record with the same keys as `obj`, each value produced by `f`
///
/// `f` is called exactly once per key, in `obj`'s iteration order, with
/// `(value, key, obj)`.
///
/// # Examples
///
/// ```
/// use objkit::{map_obj, record};
///
/// let doubled = map_obj(|v, _key, _obj| v * 2, &record! { "a" => 1, "b" => 2 });
/// assert_eq!(doubled, record! { "a" => 2, "b" => 4 });
/// ```
pub fn map_obj<V, U, F>(mut f: F, obj: &Record<V>) -> Record<U>
where
    F: FnMut(&V, &str, &Record<V>) -> U,
{
    let mut result = Record::with_capacity(obj.len());
    for (key, value) in obj {
        result.insert(key.clone(), f(value, key, obj));
    }
    result
}

/// Pure: Fallible form of [`map_obj`]
///
/// Stops at the first key whose transform fails and returns that error as-is.
/// Entries computed before the failure are dropped with the attempt; no keys
/// after it are visited.
///
/// # Examples
///
/// ```
/// use objkit::{record, try_map_obj};
///
/// let parsed = try_map_obj(
///     |v, _key, _obj| v.parse::<u32>(),
///     &record! { "port" => "8080", "workers" => "4" },
/// );
/// assert_eq!(parsed.unwrap(), record! { "port" => 8080u32, "workers" => 4 });
/// ```
pub fn try_map_obj<V, U, E, F>(mut f: F, obj: &Record<V>) -> Result<Record<U>, E>
where
    F: FnMut(&V, &str, &Record<V>) -> Result<U, E>,
{
    let mut result = Record::with_capacity(obj.len());
    for (key, value) in obj {
        result.insert(key.clone(), f(value, key, obj)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_map_obj_doubles_values() {
        let obj = record! { "a" => 1, "b" => 2 };
        let result = map_obj(|v, _, _| v * 2, &obj);
        assert_eq!(result, record! { "a" => 2, "b" => 4 });
    }

    #[test]
    fn test_map_obj_empty_never_calls_transform() {
        let obj: Record<i32> = Record::new();
        let mut calls = 0;
        let result: Record<i32> = map_obj(
            |v, _, _| {
                calls += 1;
                *v
            },
            &obj,
        );
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_map_obj_visits_keys_once_in_order() {
        let obj = record! { "c" => 3, "a" => 1, "b" => 2 };
        let mut seen = Vec::new();
        let result = map_obj(
            |v, k, _| {
                seen.push(k.to_string());
                *v
            },
            &obj,
        );

        assert_eq!(seen, vec!["c", "a", "b"]);
        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_map_obj_passes_key_and_source() {
        let obj = record! { "x" => 10, "y" => 20 };
        let result = map_obj(|v, k, src| format!("{k}={v}/{}", src.len()), &obj);
        assert_eq!(result["x"], "x=10/2");
        assert_eq!(result["y"], "y=20/2");
    }

    #[test]
    fn test_map_obj_changes_value_type() {
        let obj = record! { "flag" => 0, "other" => 7 };
        let result: Record<bool> = map_obj(|v, _, _| *v != 0, &obj);
        assert_eq!(result, record! { "flag" => false, "other" => true });
    }

    #[test]
    fn test_map_obj_leaves_input_untouched() {
        let obj = record! { "a" => 1 };
        let _ = map_obj(|v, _, _| v + 100, &obj);
        assert_eq!(obj, record! { "a" => 1 });
    }

    #[test]
    fn test_try_map_obj_stops_at_first_error() {
        let obj = record! { "a" => 1, "b" => -1, "c" => 3 };
        let mut visited = Vec::new();

        let result: Result<Record<u32>, String> = try_map_obj(
            |v: &i32, k, _| {
                visited.push(k.to_string());
                u32::try_from(*v).map_err(|_| format!("negative value at {k}"))
            },
            &obj,
        );

        assert_eq!(result.unwrap_err(), "negative value at b");
        assert_eq!(visited, vec!["a", "b"]);
    }

    #[test]
    fn test_try_map_obj_success() {
        let obj = record! { "a" => "1", "b" => "2" };
        let result = try_map_obj(|v, _, _| v.parse::<i64>(), &obj).unwrap();
        assert_eq!(result, record! { "a" => 1i64, "b" => 2 });
    }
}
