//! Row encoding as JSON-array-shaped text
//!
//! [`encode`] reproduces the layout existing client-side consumers parse:
//! the first value is emitted bare and every following value is wrapped in
//! double quotes. Nothing is escaped, so values must not contain `"` or `,`.
//! [`encode_strict`] is the standards-compliant alternative.

use std::fmt::Write;

use serde_json::Value;

use crate::frame::Matrix;

/// Encode one row as `[v0,"v1",...,"vn-1"]`.
pub fn encode<S: AsRef<str>>(values: &[S]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        let value = value.as_ref();
        if i == 0 {
            out.push_str(value);
        } else {
            let _ = write!(out, ",\"{}\"", value);
        }
    }
    out.push(']');
    out
}

/// Encode every matrix row with [`encode`], in row order.
pub fn encode_matrix(matrix: &Matrix) -> Vec<String> {
    matrix.rows().map(|row| encode(row)).collect()
}

/// Encode one row as a JSON array of strings with proper quoting and escaping.
pub fn encode_strict<S: AsRef<str>>(values: &[S]) -> String {
    Value::Array(
        values
            .iter()
            .map(|v| Value::String(v.as_ref().to_string()))
            .collect(),
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pair() {
        assert_eq!(encode(&["10.5", "2.3"]), "[10.5,\"2.3\"]");
    }

    #[test]
    fn test_encode_three() {
        assert_eq!(encode(&["a", "b", "c"]), "[a,\"b\",\"c\"]");
    }

    #[test]
    fn test_encode_many() {
        assert_eq!(
            encode(&["1", "x", "y", "z", "w"]),
            "[1,\"x\",\"y\",\"z\",\"w\"]"
        );
    }

    #[test]
    fn test_encode_short_rows() {
        let empty: [&str; 0] = [];
        assert_eq!(encode(&empty), "[]");
        assert_eq!(encode(&["7"]), "[7]");
    }

    #[test]
    fn test_encode_does_not_escape() {
        assert_eq!(encode(&["a", "b\"c"]), "[a,\"b\"c\"]");
    }

    #[test]
    fn test_encode_matrix_rows_in_order() {
        let m = Matrix::from_rows(vec![vec!["13.4", "52.5"], vec!["2.35", "48.85"]]).unwrap();
        assert_eq!(
            encode_matrix(&m),
            vec!["[13.4,\"52.5\"]", "[2.35,\"48.85\"]"]
        );
    }

    #[test]
    fn test_encode_strict_quotes_and_escapes() {
        assert_eq!(encode_strict(&["10.5", "a\"b"]), r#"["10.5","a\"b"]"#);
        let empty: [&str; 0] = [];
        assert_eq!(encode_strict(&empty), "[]");
    }
}
