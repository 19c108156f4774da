//! Record operations over untyped JSON values
//!
//! These functions accept any [`serde_json::Value`], check that the arguments
//! that must be objects really are, and then defer to the typed helpers in
//! [`crate::core`]. Object key order is preserved end to end (`serde_json` is
//! built with `preserve_order`).
//!
//! Arguments that are not objects are handled according to
//! [`JsonOptions::non_object`]: rejected with [`ObjkitError::NotAnObject`] by
//! default, or treated as `{}`.

use crate::config::{JsonOptions, NonObjectPolicy};
use crate::core::{merge_all_owned, pick, try_map_obj};
use crate::error::{ObjkitError, Result};
use crate::record::Record;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Map `f` over the entries of the object `obj`
///
/// A failing `f` aborts the whole call with [`ObjkitError::Transform`] naming
/// the key; nothing is returned for the keys already mapped.
pub fn map_obj_value<F, E>(mut f: F, obj: &Value, opts: &JsonOptions) -> Result<Value>
where
    F: FnMut(&Value, &str, &Record<Value>) -> std::result::Result<Value, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let record = object_arg("obj", obj, opts)?;
    let mapped = try_map_obj(
        |value, key, source| f(value, key, source).map_err(|e| ObjkitError::transform(key, e)),
        &record,
    )?;

    trace!(operation = "map_obj", keys = mapped.len(), "mapped object");
    Ok(into_value(mapped))
}

/// Copy the entries of the object `obj` whose keys appear in `keys`
pub fn pick_value<K, I>(keys: I, obj: &Value, opts: &JsonOptions) -> Result<Value>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let record = object_arg("obj", obj, opts)?;
    let picked = pick(keys, &record);

    trace!(
        operation = "pick",
        available = record.len(),
        picked = picked.len(),
        "picked keys"
    );
    Ok(into_value(picked))
}

/// Merge the objects `a` and `b`, `b` winning on shared keys
pub fn merge_values(a: &Value, b: &Value, opts: &JsonOptions) -> Result<Value> {
    let left = object_arg("a", a, opts)?;
    let right = object_arg("b", b, opts)?;
    let merged = merge_all_owned([left, right]);

    trace!(operation = "merge", keys = merged.len(), "merged objects");
    Ok(into_value(merged))
}

/// Merge a JSON array of objects, or a single object, later entries winning
///
/// Anything that is not an array is treated as a one-element sequence.
pub fn merge_all_values(objs: &Value, opts: &JsonOptions) -> Result<Value> {
    let records = match objs {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(to_record(map)),
                other => on_non_object(
                    opts,
                    ObjkitError::sequence_item_not_an_object(index, type_name(other)),
                ),
            })
            .collect::<Result<Vec<_>>>()?,
        single => vec![object_arg("objs", single, opts)?],
    };

    let inputs = records.len();
    let merged = merge_all_owned(records);

    trace!(
        operation = "merge_all",
        inputs,
        keys = merged.len(),
        "merged objects"
    );
    Ok(into_value(merged))
}

fn object_arg(argument: &str, value: &Value, opts: &JsonOptions) -> Result<Record<Value>> {
    match value {
        Value::Object(map) => Ok(to_record(map)),
        other => on_non_object(opts, ObjkitError::not_an_object(argument, type_name(other))),
    }
}

fn on_non_object(opts: &JsonOptions, err: ObjkitError) -> Result<Record<Value>> {
    match opts.non_object {
        NonObjectPolicy::Reject => {
            debug!("Rejecting non-object argument: {}", err);
            Err(err)
        }
        NonObjectPolicy::TreatAsEmpty => {
            debug!("Treating non-object argument as empty: {}", err);
            Ok(Record::new())
        }
    }
}

fn to_record(map: &Map<String, Value>) -> Record<Value> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn into_value(record: Record<Value>) -> Value {
    Value::Object(record.into_iter().collect())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
