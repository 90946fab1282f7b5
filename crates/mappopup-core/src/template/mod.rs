//! Popup templates
//!
//! A template is a plain string holding a placeholder token (`<%=pop%>` by
//! default). It is loaded once and never mutated; every injection produces a
//! new string from the pristine text.

pub mod error;
pub mod loader;

pub use error::TemplateError;
pub use loader::load_template;

use crate::replace::replace;

/// Immutable popup template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of non-overlapping occurrences of `placeholder`
    pub fn placeholder_count(&self, placeholder: &str) -> usize {
        if placeholder.is_empty() {
            return 0;
        }
        self.text.matches(placeholder).count()
    }

    /// Fail unless `placeholder` occurs at least once
    pub fn require_placeholder(&self, placeholder: &str) -> Result<(), TemplateError> {
        if self.placeholder_count(placeholder) == 0 {
            return Err(TemplateError::MissingPlaceholder {
                placeholder: placeholder.to_string(),
            });
        }
        Ok(())
    }

    /// Substitute `fragment` for every `placeholder` in a fresh copy of the
    /// template. A template without the placeholder comes back unchanged.
    pub fn fill(&self, placeholder: &str, fragment: &str) -> String {
        replace(&self.text, placeholder, fragment)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
