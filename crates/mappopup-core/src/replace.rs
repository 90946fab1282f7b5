//! Literal substring replacement
//!
//! Scans left to right and never rescans inserted text, so a replacement that
//! contains the pattern cannot cause runaway expansion.

/// Replace every non-overlapping occurrence of `pattern` in `source`.
///
/// An empty `pattern` matches nothing and returns `source` unchanged.
pub fn replace(source: &str, pattern: &str, replacement: &str) -> String {
    replace_counted(source, pattern, replacement).0
}

/// Same as [`replace`], also returning how many occurrences were replaced.
pub fn replace_counted(source: &str, pattern: &str, replacement: &str) -> (String, usize) {
    if pattern.is_empty() {
        return (source.to_string(), 0);
    }

    let mut output = String::with_capacity(source.len());
    let mut count = 0;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find(pattern) {
        output.push_str(&source[pos..pos + offset]);
        output.push_str(replacement);
        pos += offset + pattern.len();
        count += 1;
    }
    output.push_str(&source[pos..]);

    (output, count)
}
