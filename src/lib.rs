//! Reverse JSON path: build and patch JSON documents by writing values at
//! path expressions such as `$.orders[2].id`.
//!
//! Missing objects and arrays along the path are created, arrays grow to the
//! requested index, and `$` replaces the whole document. Paths compile once
//! into an [`InversePath`] and can be applied any number of times; a
//! [`RuleSet`] applies an ordered list of writes to assemble a document.
//!
//! ```
//! use revpath::write_path;
//! use serde_json::{Value, json};
//!
//! let mut doc = Value::Null;
//! write_path(&mut doc, "$.a.b[2].c", json!(1)).unwrap();
//! assert_eq!(doc.pointer("/a/b/2/c"), Some(&json!(1)));
//! ```

pub mod error;
pub mod inverse;
pub mod rules;

pub use error::RevPathError;
pub use inverse::{InversePath, write_path};
pub use rules::{Rule, RuleSet};

// Re-export the building blocks for callers that compile or apply by hand.
pub use revpath_jpath::{Expression, JPathError, Step, compile, is_writable, tokenize};
pub use revpath_writer::{Slot, WriteError, apply};
