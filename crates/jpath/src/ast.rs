//! Defines the compiled form of a writable path expression.
use std::fmt;

/// One resolved segment of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// An object key (e.g., `.name`).
    Field(String),
    /// An array index, optionally under a named field (e.g., `.items[2]`).
    ///
    /// An empty `key` is an anonymous slot (`[2]`): the current container is
    /// itself the array.
    Index { key: String, index: usize },
}

impl Step {
    /// The field name this step addresses. Empty for anonymous array slots.
    pub fn key(&self) -> &str {
        match self {
            Step::Field(key) => key,
            Step::Index { key, .. } => key,
        }
    }

    /// The array index, or `None` for a plain field step.
    pub fn index(&self) -> Option<usize> {
        match self {
            Step::Field(_) => None,
            Step::Index { index, .. } => Some(*index),
        }
    }

    /// True for `[i]` with no field name: the current container is the array.
    pub fn is_anonymous_index(&self) -> bool {
        matches!(self, Step::Index { key, .. } if key.is_empty())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(key) => f.write_str(key),
            Step::Index { key, index } => write!(f, "{}[{}]", key, index),
        }
    }
}

/// A compiled path expression, ready to be applied any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    is_root: bool,
    steps: Vec<Step>,
}

impl Expression {
    /// The expression that denotes the whole tree (`$`).
    pub fn root() -> Self {
        Self { is_root: true, steps: Vec::new() }
    }

    /// An empty step list is the root expression.
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self { is_root: steps.is_empty(), steps }
    }

    /// True when a write replaces the entire tree.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// The traversal steps, in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for (position, step) in self.steps.iter().enumerate() {
            if position == 0 && step.is_anonymous_index() {
                write!(f, "{}", step)?;
            } else {
                write!(f, ".{}", step)?;
            }
        }
        Ok(())
    }
}
