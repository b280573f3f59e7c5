use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    #[error("Cannot write through '{segment}': expected {expected}, found {found}")]
    TypeMismatch {
        segment: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Index in '{segment}' is too large to address")]
    IndexOutOfRange { segment: String },

    #[error("Destination cannot be replaced: {0}")]
    RootHandle(String),
}
