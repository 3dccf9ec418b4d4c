use super::*;
use serde_json::json;

#[test]
fn test_decode_rows() {
    let rows = RowSet::from_json_text(
        r#"[{"table_name":"companies","total_records":6},{"table_name":"users","total_records":0}]"#,
    )
    .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(column_str(&rows.rows()[0], "table_name"), Some("companies"));
    assert_eq!(column_i64(&rows.rows()[1], "total_records"), Some(0));
}

#[test]
fn test_empty_body_and_null_are_empty() {
    assert!(RowSet::from_json_text("").unwrap().is_empty());
    assert!(RowSet::from_json_text("  \n").unwrap().is_empty());
    assert!(RowSet::from_json_text("null").unwrap().is_empty());
    assert!(RowSet::from_json_text("[]").unwrap().is_empty());
}

#[test]
fn test_non_array_is_decode_error() {
    let err = RowSet::from_json_text(r#"{"status":"ok"}"#).unwrap_err();
    assert!(matches!(err, DbError::Decode(ref m) if m.contains("an object")));
}

#[test]
fn test_non_object_row_is_decode_error() {
    let err = RowSet::from_json_text("[1, 2]").unwrap_err();
    assert!(matches!(err, DbError::Decode(ref m) if m.contains("row 0")));
}

#[test]
fn test_malformed_json_is_decode_error() {
    let err = RowSet::from_json_text("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, DbError::Decode(_)));
}

#[test]
fn test_column_i64_accepts_numeric_strings() {
    let row: Row = serde_json::from_value(json!({
        "a": 6,
        "b": "6",
        "c": " 12 ",
        "d": "six",
        "e": null,
        "f": 1.5
    }))
    .unwrap();
    assert_eq!(column_i64(&row, "a"), Some(6));
    assert_eq!(column_i64(&row, "b"), Some(6));
    assert_eq!(column_i64(&row, "c"), Some(12));
    assert_eq!(column_i64(&row, "d"), None);
    assert_eq!(column_i64(&row, "e"), None);
    assert_eq!(column_i64(&row, "f"), None);
    assert_eq!(column_i64(&row, "missing"), None);
}

#[test]
fn test_rowset_serializes_as_array() {
    let rows = RowSet::from_json_text(r#"[{"n":1}]"#).unwrap();
    assert_eq!(serde_json::to_value(&rows).unwrap(), json!([{"n": 1}]));
}
