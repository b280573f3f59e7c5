use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JPathError {
    #[error("JPath syntax error in '{path}': {message}")]
    Syntax { path: String, message: String },

    #[error("JPath index error in '{path}': segment '{segment}' needs a non-negative integer index")]
    InvalidIndex { path: String, segment: String },
}

impl JPathError {
    pub(crate) fn syntax(path: &str, message: impl Into<String>) -> Self {
        JPathError::Syntax {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
