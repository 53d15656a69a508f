use chart3d_rs::api::{ChartOptions, FieldBinding, build_axis_configs};
use chart3d_rs::core::{AxisValue, LayoutType};

const OPTIONS_JSON: &str = r#"{
    "coord": {
        "xAxis": { "field": "year", "layoutType": "peak" },
        "yAxis": { "field": ["sales", "cost"], "dataSection": [0, 50, 100] },
        "zAxis": { "depth": 120 }
    },
    "graphs": [
        { "type": "bar3d", "field": "sales" },
        { "type": "line", "field": "profit", "yAxisName": "right" }
    ]
}"#;

#[test]
fn options_parse_from_camel_case_json() {
    let options = ChartOptions::from_json_str(OPTIONS_JSON).expect("parse options");

    assert_eq!(options.coord.x_axis.layout_type, Some(LayoutType::Peak));
    assert_eq!(options.coord.y_axis.len(), 1);
    assert_eq!(
        options.coord.y_axis[0].field,
        Some(FieldBinding::from(vec!["sales", "cost"]))
    );
    assert_eq!(
        options.coord.y_axis[0].data_section,
        Some(vec![
            AxisValue::from(0.0),
            AxisValue::from(50.0),
            AxisValue::from(100.0)
        ])
    );
    assert_eq!(options.coord.z_axis.depth, Some(120.0));
    assert_eq!(options.graphs[1].y_axis_name.as_deref(), Some("right"));
}

#[test]
fn y_axis_accepts_a_list() {
    let json = r#"{
        "coord": { "yAxis": [ { "field": "a" }, { "name": "right", "layoutType": "rule" } ] },
        "graphs": []
    }"#;
    let options = ChartOptions::from_json_str(json).expect("parse options");
    assert_eq!(options.coord.y_axis.len(), 2);
    assert_eq!(options.coord.y_axis[1].name.as_deref(), Some("right"));
}

#[test]
fn parsed_options_build_expected_axes() {
    let options = ChartOptions::from_json_str(OPTIONS_JSON).expect("parse options");
    let configs = build_axis_configs(&options).configs;

    assert_eq!(configs.z_axis.depth, Some(120.0));
    assert_eq!(configs.y_axes.len(), 2);
    assert_eq!(
        configs.y_axes[0].fields,
        vec!["sales".to_owned(), "cost".to_owned(), "sales".to_owned()]
    );
}

#[test]
fn options_round_trip_through_pretty_json() {
    let options = ChartOptions::from_json_str(OPTIONS_JSON).expect("parse options");
    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"layoutType\": \"peak\""));
    assert!(json.contains("\"type\": \"bar3d\""));
    assert_eq!(ChartOptions::from_json_str(&json).expect("reparse"), options);
}

#[test]
fn invalid_json_is_a_config_error() {
    assert!(ChartOptions::from_json_str("{ not json").is_err());
    assert!(ChartOptions::from_json_str(r#"{"coord": {"xAxis": {"layoutType": "spiral"}}}"#).is_err());
}

#[test]
fn empty_field_names_bind_nothing() {
    let binding = FieldBinding::from(vec!["", "a", ""]);
    assert_eq!(binding.fields(), vec!["a".to_owned()]);
    assert!(FieldBinding::from("").is_empty());
    assert_eq!(FieldBinding::from(vec!["a", "b"]).label(), "a,b");
}
