use chart3d_rs::core::{AxisValue, DataSet};
use serde_json::json;

#[test]
fn matrix_rows_become_columns() {
    let rows = vec![
        vec![json!("year"), json!("sales")],
        vec![json!("2016"), json!(111)],
        vec![json!("2017"), json!(95.5)],
    ];
    let data = DataSet::from_matrix(&rows).expect("matrix");

    assert_eq!(data.field_names().collect::<Vec<_>>(), vec!["year", "sales"]);
    assert_eq!(
        data.column("year").expect("year"),
        &[AxisValue::from("2016"), AxisValue::from("2017")]
    );
    assert_eq!(
        data.column("sales").expect("sales"),
        &[AxisValue::from(111.0), AxisValue::from(95.5)]
    );
}

#[test]
fn matrix_rejects_non_string_header_and_long_rows() {
    let bad_header = vec![vec![json!(1), json!("sales")]];
    assert!(DataSet::from_matrix(&bad_header).is_err());

    let long_row = vec![vec![json!("year")], vec![json!("2016"), json!(1)]];
    assert!(DataSet::from_matrix(&long_row).is_err());
}

#[test]
fn records_skip_null_cells() {
    let records = vec![
        json!({"year": "2016", "sales": 10}),
        json!({"year": "2017", "sales": null}),
    ];
    let data = DataSet::from_records(&records).expect("records");
    assert_eq!(data.column("sales").expect("sales").len(), 1);
    assert_eq!(data.column("year").expect("year").len(), 2);
}

#[test]
fn json_input_accepts_both_shapes() {
    let matrix = DataSet::from_json_str(r#"[["a","b"],[1,2],[3,4]]"#).expect("matrix json");
    let records = DataSet::from_json_str(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#).expect("records json");
    assert_eq!(matrix, records);

    assert!(DataSet::from_json_str(r#"{"a":1}"#).is_err());
    assert!(DataSet::from_json_str("[]").expect("empty").is_empty());
}

#[test]
fn collect_fields_concatenates_in_field_order() {
    let data = DataSet::new()
        .with_column("a", [AxisValue::from(1), AxisValue::from(2)])
        .with_column("b", [AxisValue::from(3)]);
    let fields = vec!["b".to_owned(), "missing".to_owned(), "a".to_owned()];
    assert_eq!(
        data.collect_fields(&fields),
        vec![AxisValue::from(3), AxisValue::from(1), AxisValue::from(2)]
    );
}

#[test]
fn boolean_cells_are_kept_as_labels() {
    let data = DataSet::from_json_str(r#"[["flag"],[true]]"#).expect("json");
    assert_eq!(data.column("flag").expect("flag"), &[AxisValue::from("true")]);
}
