//! The handle a write goes through.
use serde_json::{Map, Value};

/// A mutable handle onto the destination of a write.
///
/// `Slot::Value` is a replaceable cell: root writes and root-array writes
/// assign through it, and the caller sees the new value. `Slot::Object`
/// borrows an existing object, which can be filled but never swapped for
/// another value.
#[derive(Debug)]
pub enum Slot<'a> {
    Value(&'a mut Value),
    Object(&'a mut Map<String, Value>),
}

impl<'a> From<&'a mut Value> for Slot<'a> {
    fn from(value: &'a mut Value) -> Self {
        Slot::Value(value)
    }
}

impl<'a> From<&'a mut Map<String, Value>> for Slot<'a> {
    fn from(map: &'a mut Map<String, Value>) -> Self {
        Slot::Object(map)
    }
}

/// Names a value's variant for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
