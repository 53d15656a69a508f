use chart3d_rs::api::CoordinateSystem;
use chart3d_rs::core::{DataSet, ValueTriple, Viewport};
use chart3d_rs::render::HeadlessHost;
use chart3d_rs::{ChartOptions, telemetry};
use nalgebra::Vector3;

#[test]
fn coordinate_system_smoke_flow() {
    let _ = telemetry::init_default_tracing();

    let options = ChartOptions::from_json_str(
        r#"{
            "coord": { "xAxis": { "field": "year" }, "zAxis": { "depth": 300 } },
            "graphs": [
                { "type": "bar3d", "field": "sales" },
                { "type": "line", "field": ["cost", "profit"], "yAxisName": "right" }
            ]
        }"#,
    )
    .expect("options");
    let data = DataSet::from_json_str(
        r#"[
            ["year", "sales", "cost", "profit"],
            ["2016", 111, 40, 12],
            ["2017", 95, 38, 9],
            ["2018", 130, 52, 20]
        ]"#,
    )
    .expect("data");

    let host = HeadlessHost::new(Viewport::new(1024, 768)).expect("host");
    let mut system = CoordinateSystem::new(host, options, data).expect("coordinate system");
    assert_eq!(system.problems().count(), 0);
    assert_eq!(system.y_axes().count(), 2);

    let right = system.y_axis(Some("right")).expect("right axis");
    let points = system.project_points(
        &[
            ValueTriple::new("2016", 12.0, "sales"),
            ValueTriple::new("2018", 20.0, "cost,profit"),
        ],
        right,
    );
    assert_eq!(points.len(), 2);
    for point in &points {
        let screen = system.position_to_screen(point);
        assert!(screen.x.is_finite() && screen.y.is_finite());
    }

    let ceil = system.ceil_size();
    assert!(ceil.x > 0.0 && ceil.y > 0.0 && ceil.z > 0.0);

    system.update_origin(Vector3::new(50.0, 50.0, 0.0));
    system.resize(Viewport::new(640, 480)).expect("resize");
    assert_eq!(system.boundbox().max.z, 300.0);
    assert!(system.ratio_pixel_to_world(None) > 0.0);

    let host = system.into_host();
    assert_eq!(host.box_depth(), 768.0);
}
