//! A path expression that can be loaded from configuration and applied as a
//! write.
use crate::error::RevPathError;
use revpath_jpath::{Expression, compile, is_writable};
use revpath_writer::{Slot, apply};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A compiled write path.
///
/// The path is compiled once, when the value is built or deserialized, and
/// can then be applied to any number of destinations.
///
/// ```
/// use revpath::InversePath;
/// use serde_json::{Value, json};
///
/// let path: InversePath = serde_json::from_str(r#""$.user.tags[1]""#).unwrap();
/// let mut doc = Value::Null;
/// path.set(&mut doc, json!("admin")).unwrap();
/// assert_eq!(doc, json!({"user": {"tags": [null, "admin"]}}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InversePath {
    source: String,
    expr: Expression,
}

impl InversePath {
    /// Compiles `path` with the permissive compiler.
    pub fn new(path: &str) -> Result<Self, RevPathError> {
        Ok(Self {
            source: path.to_string(),
            expr: compile(path)?,
        })
    }

    /// Compiles `path` after checking it against the writable grammar
    /// (`$`, optional `[n]`, then `.field` or `.field[n]` segments).
    pub fn strict(path: &str) -> Result<Self, RevPathError> {
        if !is_writable(path) {
            return Err(RevPathError::NotWritable(path.to_string()));
        }
        Self::new(path)
    }

    /// Writes `value` into `dst` at this path.
    pub fn set<'a>(&self, dst: impl Into<Slot<'a>>, value: Value) -> Result<(), RevPathError> {
        apply(&self.expr, dst, value)?;
        Ok(())
    }

    /// The path as it was written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }
}

impl FromStr for InversePath {
    type Err = RevPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for InversePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for InversePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for InversePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(|e| de::Error::custom(format!("invalid rule '{}': {}", raw, e)))
    }
}

/// Compiles `path` and writes `value` into `dst` in one call.
///
/// Prefer [`InversePath`] when the same path is written more than once.
pub fn write_path<'a>(
    dst: impl Into<Slot<'a>>,
    path: &str,
    value: Value,
) -> Result<(), RevPathError> {
    InversePath::new(path)?.set(dst, value)
}
