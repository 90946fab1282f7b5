//! Integration tests for row JSON encoding

use mappopup_core::{encode, encode_matrix, encode_strict, Matrix};
use mappopup_testkit::sample_frame;

#[test]
fn test_coordinate_pairs() {
    assert_eq!(encode(&["10.5", "2.3"]), r#"[10.5,"2.3"]"#);
    assert_eq!(encode(&["a", "b", "c"]), r#"[a,"b","c"]"#);
}

#[test]
fn test_encode_frame_rows() {
    let matrix = sample_frame().to_matrix().unwrap();
    let encoded = encode_matrix(&matrix);

    assert_eq!(encoded.len(), 3);
    assert_eq!(
        encoded[0],
        r#"[1,"Berlin","3645000","TRUE","13.4","52.52"]"#
    );
    assert_eq!(encoded[2], r#"[3,"Wien","NA","TRUE","16.37","48.21"]"#);
}

#[test]
fn test_encode_matrix_empty() {
    let matrix = Matrix::new(0, 2, Vec::new()).unwrap();
    assert!(encode_matrix(&matrix).is_empty());
}

#[test]
fn test_strict_encoding_is_valid_json() {
    let row = ["1", "say \"hi\"", "a,b"];
    let parsed: Vec<String> = serde_json::from_str(&encode_strict(&row)).unwrap();
    assert_eq!(parsed, row);
}
