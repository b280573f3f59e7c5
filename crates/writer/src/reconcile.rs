//! Container reconciliation: the one place where a slot is checked against,
//! or upgraded to, the container kind the next step needs.
//!
//! Only `null` is ever upgraded. Any other mismatch is reported, never
//! overwritten.
use crate::error::WriteError;
use crate::slot::kind_name;
use revpath_jpath::Step;
use serde_json::{Map, Value};

/// Requires `container` to already be an object.
pub(crate) fn expect_object<'v>(
    container: &'v mut Value,
    step: &Step,
) -> Result<&'v mut Map<String, Value>, WriteError> {
    match container {
        Value::Object(map) => Ok(map),
        other => Err(mismatch(step, "object", other)),
    }
}

/// Requires `container` to already be an array.
pub(crate) fn expect_array<'v>(
    container: &'v mut Value,
    step: &Step,
) -> Result<&'v mut Vec<Value>, WriteError> {
    match container {
        Value::Array(items) => Ok(items),
        other => Err(mismatch(step, "array", other)),
    }
}

/// Makes `slot` an object, creating an empty one in place of `null`.
pub(crate) fn ensure_object<'v>(
    slot: &'v mut Value,
    step: &Step,
) -> Result<&'v mut Map<String, Value>, WriteError> {
    if slot.is_null() {
        log::debug!("creating object at '{}'", step);
        *slot = Value::Object(Map::new());
    }
    expect_object(slot, step)
}

/// Makes `slot` an array of at least `min_len` items, creating one in place
/// of `null` and padding an existing one with `null`.
pub(crate) fn ensure_array<'v>(
    slot: &'v mut Value,
    min_len: usize,
    step: &Step,
) -> Result<&'v mut Vec<Value>, WriteError> {
    if slot.is_null() {
        log::debug!("creating array of {} at '{}'", min_len, step);
        *slot = Value::Array(vec![Value::Null; min_len]);
    }
    let items = expect_array(slot, step)?;
    grow_to(items, min_len);
    Ok(items)
}

/// The array length needed to hold `index`.
pub(crate) fn len_to_hold(step: &Step, index: usize) -> Result<usize, WriteError> {
    index.checked_add(1).ok_or_else(|| WriteError::IndexOutOfRange {
        segment: step.to_string(),
    })
}

/// Pads `items` with `null` up to `min_len`. Never shrinks.
pub(crate) fn grow_to(items: &mut Vec<Value>, min_len: usize) {
    if items.len() < min_len {
        log::debug!("growing array from {} to {}", items.len(), min_len);
        items.resize(min_len, Value::Null);
    }
}

/// Replaces `null` placeholders with empty objects so traversal can pass
/// through them.
pub(crate) fn fill_placeholders(items: &mut [Value]) {
    for item in items.iter_mut().filter(|item| item.is_null()) {
        *item = Value::Object(Map::new());
    }
}

fn mismatch(step: &Step, expected: &'static str, found: &Value) -> WriteError {
    WriteError::TypeMismatch {
        segment: step.to_string(),
        expected,
        found: kind_name(found),
    }
}
