use chart3d_rs::core::{Axis, BoundingBoxCalculator, BoundingVolume};
use nalgebra::{Point3, Vector3};

#[test]
fn centered_volume_is_symmetric() {
    let volume = BoundingVolume::centered(800.0, 600.0, 400.0);
    assert_eq!(volume.min, Point3::new(-400.0, -300.0, -200.0));
    assert_eq!(volume.max, Point3::new(400.0, 300.0, 200.0));
    assert_eq!(volume.size(), Vector3::new(800.0, 600.0, 400.0));
    assert_eq!(volume.extent(Axis::Y), 600.0);
    assert_eq!(volume.midpoint(), Point3::origin());
}

#[test]
fn local_box_starts_at_origin_and_subtracts_offset() {
    let base = BoundingVolume::centered(800.0, 600.0, 400.0);
    let local = BoundingBoxCalculator::default()
        .local_box(&base, &Vector3::new(40.0, 20.0, 10.0));
    assert_eq!(local.min, Point3::origin());
    assert_eq!(local.max, Point3::new(760.0, 580.0, 390.0));
}

#[test]
fn configured_depth_replaces_local_depth() {
    let base = BoundingVolume::centered(800.0, 600.0, 400.0);
    let calculator = BoundingBoxCalculator::new(Some(50.0));
    let local = calculator.local_box(&base, &Vector3::new(40.0, 20.0, 10.0));
    assert_eq!(local.max.z, 50.0);
    assert_eq!(calculator.depth(), Some(50.0));
}

#[test]
fn local_center_negates_depth() {
    let local = BoundingVolume::new(Point3::origin(), Point3::new(100.0, 60.0, 50.0));
    assert_eq!(
        BoundingBoxCalculator::local_center(&local),
        Point3::new(50.0, 30.0, -25.0)
    );
}

#[test]
fn world_origin_is_near_bottom_left_corner() {
    let base = BoundingVolume::centered(800.0, 600.0, 400.0);
    assert_eq!(
        BoundingBoxCalculator::world_origin(&base, &Vector3::zeros()),
        Point3::new(-400.0, -300.0, 200.0)
    );
    assert_eq!(
        BoundingBoxCalculator::world_origin(&base, &Vector3::new(10.0, 5.0, -2.0)),
        Point3::new(-390.0, -295.0, 198.0)
    );
}
