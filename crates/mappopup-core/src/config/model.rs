use serde::{Deserialize, Serialize};

use super::consts::{DEFAULT_PLACEHOLDER, DEFAULT_SPACER, RESERVED_FIELDS};
use crate::error::{PopupError, Result};
use crate::row::{ReservedFields, RowOptions};

/// Popup rendering settings, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub include_row_index: bool,
    #[serde(default = "default_reserved_fields")]
    pub reserved_fields: Vec<String>,
    #[serde(default = "default_spacer")]
    pub spacer: String,
    /// Reject templates without a placeholder instead of passing them through
    #[serde(default)]
    pub strict_placeholder: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            include_row_index: false,
            reserved_fields: default_reserved_fields(),
            spacer: default_spacer(),
            strict_placeholder: false,
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_reserved_fields() -> Vec<String> {
    RESERVED_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_spacer() -> String {
    DEFAULT_SPACER.to_string()
}

impl PopupConfig {
    pub fn with_row_index(include_row_index: bool) -> Self {
        Self {
            include_row_index,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PopupConfig =
            toml::from_str(content).map_err(|e| PopupError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PopupError::ConfigParseError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Write a config file
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PopupError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(PopupError::IoError)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(PopupError::ConfigInvalidValue {
                field: "placeholder".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn row_options(&self) -> RowOptions {
        RowOptions {
            include_index: self.include_row_index,
            spacer: self.spacer.clone(),
        }
    }

    pub fn reserved(&self) -> ReservedFields {
        ReservedFields::new(self.reserved_fields.iter().cloned())
    }
}
