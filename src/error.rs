//! Errors surfaced to callers
//!
//! Grammar-path failures never show up here; they are absorbed by the
//! highlighter and trigger the fallback instead.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// An option value that cannot be interpreted
    #[error("invalid highlight option `{key}`: {reason}")]
    InvalidOption { key: String, reason: String },

    /// The fallback highlighter failed
    #[error("fallback highlighter failed: {0}")]
    Fallback(String),

    /// The output sink rejected a write
    #[error("failed to write highlighted output: {0}")]
    Io(#[from] io::Error),
}

impl HighlightError {
    pub(crate) fn invalid_option(key: &str, reason: impl Into<String>) -> Self {
        HighlightError::InvalidOption {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<syntect::Error> for HighlightError {
    fn from(err: syntect::Error) -> Self {
        HighlightError::Fallback(err.to_string())
    }
}

pub type Result<T, E = HighlightError> = std::result::Result<T, E>;
