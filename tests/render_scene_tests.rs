use chart3d_rs::core::Viewport;
use chart3d_rs::render::{
    Camera, Color, HeadlessHost, OrbitControls, SceneHost, THEME_FALLBACK_COLOR, Theme,
};
use nalgebra::Point3;

#[test]
fn camera_rejects_invalid_frustum() {
    assert!(Camera::perspective(45.0, 1.5, 0.1, 1000.0).is_ok());
    assert!(Camera::perspective(0.0, 1.5, 0.1, 1000.0).is_err());
    assert!(Camera::perspective(45.0, -1.0, 0.1, 1000.0).is_err());
    assert!(Camera::perspective(45.0, 1.5, 10.0, 1.0).is_err());

    let mut camera = Camera::perspective(45.0, 1.5, 0.1, 1000.0).expect("camera");
    assert!(camera.set_aspect(f64::NAN).is_err());
    assert_eq!(camera.aspect(), 1.5);
}

#[test]
fn camera_projects_target_to_ndc_center() {
    let mut camera = Camera::perspective(45.0, 1.0, 0.1, 1000.0)
        .expect("camera")
        .with_position(Point3::new(0.0, 0.0, 100.0));
    camera.look_at(Point3::new(0.0, 0.0, 0.0));

    let ndc = camera.project(&Point3::origin());
    assert!(ndc.x.abs() <= 1e-12 && ndc.y.abs() <= 1e-12);

    let right = camera.project(&Point3::new(10.0, 0.0, 0.0));
    assert!(right.x > 0.0);
}

#[test]
fn headless_host_sizes_base_box_after_viewport() {
    let host = HeadlessHost::new(Viewport::new(800, 600)).expect("host");
    let base = host.base_bounding_box();
    assert_eq!(base.min, Point3::new(-400.0, -300.0, -300.0));
    assert_eq!(base.max, Point3::new(400.0, 300.0, 300.0));

    assert!(HeadlessHost::new(Viewport::new(0, 600)).is_err());
    assert!(HeadlessHost::with_box_depth(Viewport::new(800, 600), -1.0).is_err());
}

#[test]
fn headless_host_resize_updates_camera_aspect() {
    let mut host = HeadlessHost::new(Viewport::new(800, 600)).expect("host");
    host.resize(Viewport::new(1000, 500)).expect("resize");
    assert_eq!(host.camera().aspect(), 2.0);
    assert_eq!(host.viewport(), Viewport::new(1000, 500));
}

#[test]
fn orbit_defaults_match_host_defaults() {
    let host = HeadlessHost::new(Viewport::new(800, 600))
        .expect("host")
        .with_orbit(OrbitControls::new(30.0, 0.0));
    assert_eq!(host.orbit().alpha, 30.0);
    assert_eq!(OrbitControls::default().beta, 40.0);
}

#[test]
fn theme_cycles_and_falls_back() {
    let theme = Theme::new(vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 1.0, 0.0)]);
    assert_eq!(theme.color(2), Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(Theme::new(Vec::new()).color(0), THEME_FALLBACK_COLOR);
    assert_eq!(THEME_FALLBACK_COLOR.to_hex(), "#cccccc");
}

#[test]
fn color_hex_parsing() {
    assert_eq!(Color::from_hex("#ccc").expect("short hex").to_hex(), "#cccccc");
    assert_eq!(Color::from_hex("#ff8533").expect("hex").to_hex(), "#ff8533");
    assert!(Color::from_hex("#12").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
    assert!(Color::rgba(0.5, 0.5, 0.5, 2.0).validate().is_err());
}
