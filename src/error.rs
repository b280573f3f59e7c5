// src/error.rs
use revpath_jpath::JPathError;
use revpath_writer::WriteError;
use thiserror::Error;

/// The error type for compiling, loading and applying write paths.
#[derive(Error, Debug)]
pub enum RevPathError {
    #[error("Invalid path: {0}")]
    Path(#[from] JPathError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),

    #[error("Invalid path rule: {0}")]
    Format(String),

    #[error("Path '{0}' is outside the writable grammar")]
    NotWritable(String),

    #[error("Rule #{index} ('{path}') failed: {source}")]
    Rule {
        index: usize,
        path: String,
        #[source]
        source: Box<RevPathError>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
