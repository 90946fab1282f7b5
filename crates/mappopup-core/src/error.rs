use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum PopupError {
    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template file '{path}' does not exist")]
    TemplateNotFound { path: PathBuf },

    #[error("TEMPLATE_READ_ERROR: failed to read '{path}': {message}")]
    TemplateRead { path: PathBuf, message: String },

    #[error("TEMPLATE_MISSING_PLACEHOLDER: template does not contain '{placeholder}'")]
    MissingPlaceholder { placeholder: String },

    // Shape errors
    #[error("DIMENSION_MISMATCH: {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl PopupError {
    pub(crate) fn dimension(context: &'static str, expected: usize, found: usize) -> Self {
        PopupError::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

impl From<TemplateError> for PopupError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound { path } => PopupError::TemplateNotFound { path },
            TemplateError::Unreadable { path, message } => {
                PopupError::TemplateRead { path, message }
            }
            TemplateError::MissingPlaceholder { placeholder } => {
                PopupError::MissingPlaceholder { placeholder }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PopupError>;
