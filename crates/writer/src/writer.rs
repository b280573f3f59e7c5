//! Installs a value at the location a compiled [`Expression`] names.
use crate::error::WriteError;
use crate::reconcile::{
    ensure_array, ensure_object, expect_array, expect_object, fill_placeholders, grow_to,
    len_to_hold,
};
use crate::slot::Slot;
use revpath_jpath::{Expression, Step};
use serde_json::{Map, Value};

/// Writes `value` at the location `expr` names, creating any missing
/// intermediate objects and arrays.
///
/// On error the tree keeps whatever was created or grown before the failing
/// step; nothing is rolled back.
pub fn apply<'a>(
    expr: &Expression,
    slot: impl Into<Slot<'a>>,
    value: Value,
) -> Result<(), WriteError> {
    log::trace!("applying '{}'", expr);
    match slot.into() {
        Slot::Value(root) => write_into_value(expr, root, value),
        Slot::Object(map) => write_into_object(expr, map, value),
    }
}

fn write_into_value(expr: &Expression, root: &mut Value, value: Value) -> Result<(), WriteError> {
    if expr.is_root() {
        *root = value;
        return Ok(());
    }

    // Existing containers are used as they are, even when the first step
    // would have picked the other kind.
    if !root.is_object() && !root.is_array() {
        match expr.steps().first() {
            Some(first @ Step::Index { index, .. }) if first.is_anonymous_index() => {
                let len = len_to_hold(first, *index)?;
                log::debug!("initializing root as array of {}", len);
                *root = Value::Array(vec![Value::Null; len]);
            }
            Some(_) => {
                log::debug!("initializing root as object");
                *root = Value::Object(Map::new());
            }
            None => {}
        }
    }

    walk(expr.steps(), root, value)
}

fn write_into_object(
    expr: &Expression,
    map: &mut Map<String, Value>,
    value: Value,
) -> Result<(), WriteError> {
    if expr.is_root() {
        return Err(WriteError::RootHandle(
            "'$' replaces the whole tree but the destination is a borrowed object".to_string(),
        ));
    }
    if let Some(first) = expr.steps().first()
        && first.is_anonymous_index()
    {
        return Err(WriteError::RootHandle(format!(
            "'{}' needs a root array but the destination is a borrowed object",
            first
        )));
    }

    // The first step is a field lookup, so the root itself is never replaced
    // and can be moved back once the walk is done.
    let mut root = Value::Object(std::mem::take(map));
    let result = walk(expr.steps(), &mut root, value);
    if let Value::Object(filled) = root {
        *map = filled;
    }
    result
}

fn walk(steps: &[Step], root: &mut Value, value: Value) -> Result<(), WriteError> {
    let Some((last, intermediate)) = steps.split_last() else {
        return Err(WriteError::RootHandle(
            "a path without steps must be the root path '$'".to_string(),
        ));
    };

    let mut cursor = root;
    for step in intermediate {
        cursor = descend(cursor, step)?;
    }
    install(cursor, last, value)
}

/// Moves from `container` into the child `step` names, creating it if needed.
fn descend<'v>(container: &'v mut Value, step: &Step) -> Result<&'v mut Value, WriteError> {
    match step {
        Step::Field(key) => {
            let map = expect_object(container, step)?;
            let child = map.entry(key.as_str()).or_insert(Value::Null);
            ensure_object(child, step)?;
            Ok(child)
        }
        Step::Index { key, index } => {
            let items = target_array(container, step, key, *index)?;
            fill_placeholders(&mut items[..=*index]);
            Ok(&mut items[*index])
        }
    }
}

/// Performs the final assignment.
fn install(container: &mut Value, step: &Step, value: Value) -> Result<(), WriteError> {
    match step {
        Step::Field(key) => {
            expect_object(container, step)?.insert(key.clone(), value);
        }
        Step::Index { key, index } => {
            target_array(container, step, key, *index)?[*index] = value;
        }
    }
    Ok(())
}

/// Resolves the array an index step addresses, long enough to hold `index`.
///
/// An anonymous step (`[i]`) addresses `container` itself; a named step
/// (`key[i]`) addresses the array stored under `key`.
fn target_array<'v>(
    container: &'v mut Value,
    step: &Step,
    key: &str,
    index: usize,
) -> Result<&'v mut Vec<Value>, WriteError> {
    let len = len_to_hold(step, index)?;
    if key.is_empty() {
        let items = expect_array(container, step)?;
        grow_to(items, len);
        Ok(items)
    } else {
        let map = expect_object(container, step)?;
        let child = map.entry(key).or_insert(Value::Null);
        ensure_array(child, len, step)
    }
}
