//! Template error types

use std::fmt;
use std::path::PathBuf;

/// Template loading and injection errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template file does not exist
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Template file exists but could not be read
    Unreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },

    /// Template lacks the injection token
    MissingPlaceholder {
        /// The token that was searched for
        placeholder: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NotFound { path } => {
                write!(f, "Template file '{}' not found", path.display())
            }
            TemplateError::Unreadable { path, message } => {
                write!(
                    f,
                    "Template file '{}' could not be read: {}",
                    path.display(),
                    message
                )
            }
            TemplateError::MissingPlaceholder { placeholder } => {
                write!(f, "Template does not contain placeholder '{}'", placeholder)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
