//! Canonical text form for cell and template contents

const BOM: char = '\u{feff}';

/// Decode raw bytes as UTF-8, replacing invalid sequences and dropping a
/// leading byte order mark.
pub fn normalize_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
