//! Template file loading

use std::io::ErrorKind;
use std::path::Path;

use super::error::TemplateError;
use super::Template;
use crate::frame::normalize_text;

/// Read a template file into a single-line [`Template`].
///
/// Bytes are normalized to UTF-8 and line terminators (`\n`, `\r\n`) are
/// dropped without inserting any separator.
pub fn load_template(path: impl AsRef<Path>) -> Result<Template, TemplateError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TemplateError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TemplateError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let text = normalize_text(&bytes);
    let joined: String = text.lines().collect();

    tracing::debug!("Loaded template {:?} ({} bytes)", path, joined.len());

    Ok(Template::new(joined))
}
