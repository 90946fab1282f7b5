//! Popup fixtures: template files and a small mixed-type frame

use std::path::{Path, PathBuf};

use mappopup_core::{Column, DataFrame};

/// Multi-line popup template with a single placeholder
pub const POPUP_TEMPLATE: &str = "<html>\n<head></head>\n<body>\n<table>\n<%=pop%>\n</table>\n</body>\n</html>\n";

/// Write `content` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write template {}: {}", path.display(), e));
    path
}

/// Three cities with id, coordinates and attributes of every column type
pub fn sample_frame() -> DataFrame {
    DataFrame::new()
        .with_column("Feature ID", Column::Integer(vec![Some(1), Some(2), Some(3)]))
        .with_column(
            "name",
            Column::Text(vec![
                Some("Berlin".to_string()),
                Some("Paris".to_string()),
                Some("Wien".to_string()),
            ]),
        )
        .with_column(
            "population",
            Column::Integer(vec![Some(3_645_000), Some(2_161_000), None]),
        )
        .with_column(
            "capital",
            Column::Logical(vec![Some(true), Some(true), Some(true)]),
        )
        .with_column(
            "Longitude",
            Column::Float(vec![Some(13.4), Some(2.35), Some(16.37)]),
        )
        .with_column(
            "Latitude",
            Column::Float(vec![Some(52.52), Some(48.85), Some(48.21)]),
        )
}
