//! Writes values into untyped JSON trees at locations named by path
//! expressions, growing objects and arrays as needed.
//!
//! ```
//! use revpath_jpath::compile;
//! use serde_json::{Value, json};
//!
//! let expr = compile("$.orders[1].id").unwrap();
//! let mut doc = Value::Null;
//! revpath_writer::apply(&expr, &mut doc, json!("B")).unwrap();
//! assert_eq!(doc, json!({"orders": [{}, {"id": "B"}]}));
//! ```
//!
//! The writer holds no locks. Applying several expressions to one tree needs
//! exclusive access, which `&mut` already enforces.

pub mod error;
mod reconcile;
pub mod slot;
mod writer;

pub use error::WriteError;
pub use slot::Slot;
pub use writer::apply;
