//! Ordered sets of path writes, loaded from JSON configuration, that
//! assemble a document one value at a time.
//!
//! ```json
//! {
//!   "strict": true,
//!   "rules": [
//!     { "path": "$.customer.name", "value": "ACME" },
//!     { "path": "$.orders[1].id", "value": "B" }
//!   ]
//! }
//! ```
use crate::error::RevPathError;
use crate::inverse::InversePath;
use revpath_jpath::is_writable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A single write: `value` goes to `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub path: InversePath,
    #[serde(default)]
    pub value: Value,
}

/// Rules applied in declaration order against one destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Require every path to match the writable grammar.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a rule set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, RevPathError> {
        let set: RuleSet =
            serde_json::from_str(json).map_err(|e| RevPathError::Format(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    /// Reads a rule set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RevPathError> {
        let path = path.as_ref();
        log::debug!("loading rules from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Appends a rule.
    pub fn push(&mut self, path: InversePath, value: Value) -> &mut Self {
        self.rules.push(Rule { path, value });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// In strict mode, checks every path against the writable grammar.
    pub fn validate(&self) -> Result<(), RevPathError> {
        if !self.strict {
            return Ok(());
        }
        for (index, rule) in self.rules.iter().enumerate() {
            let path = rule.path.as_str();
            if !is_writable(path) {
                return Err(rule_error(index, path, RevPathError::NotWritable(path.to_string())));
            }
        }
        Ok(())
    }

    /// Applies every rule to `dst` in order.
    ///
    /// Stops at the first failing rule. Writes made by earlier rules, and any
    /// structure the failing rule created before it failed, stay in `dst`.
    pub fn apply_to(&self, dst: &mut Value) -> Result<(), RevPathError> {
        self.validate()?;
        for (index, rule) in self.rules.iter().enumerate() {
            log::debug!("rule #{}: writing {}", index, rule.path);
            rule.path
                .set(&mut *dst, rule.value.clone())
                .map_err(|e| rule_error(index, rule.path.as_str(), e))?;
        }
        Ok(())
    }

    /// Applies every rule to `base` and returns the assembled document.
    pub fn assemble(&self, mut base: Value) -> Result<Value, RevPathError> {
        self.apply_to(&mut base)?;
        Ok(base)
    }
}

fn rule_error(index: usize, path: &str, source: RevPathError) -> RevPathError {
    RevPathError::Rule {
        index,
        path: path.to_string(),
        source: Box::new(source),
    }
}
