//! Path expressions for writing into JSON trees.
//!
//! A path such as `$.orders[2].id` names a location that a writer should
//! create or overwrite. This crate turns such strings into compiled
//! [`Expression`]s and offers two syntax checks: the permissive [`tokenize`]
//! and the strict [`is_writable`].

pub mod ast;
pub mod error;
mod parser;
mod tokenizer;
mod validator;

// --- Public API ---
pub use ast::{Expression, Step};
pub use error::JPathError;
pub use parser::compile;
pub use tokenizer::tokenize;
pub use validator::is_writable;
