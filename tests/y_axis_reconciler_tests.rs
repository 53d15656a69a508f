use chart3d_rs::api::{
    AxisConfig, AxisId, ConfigProblem, YAxis, max_segment_count, reconcile_y_axes,
    uniform_section,
};
use chart3d_rs::core::{AxisAttribute, AxisValue, LayoutType};

fn numbers(raw: &[f64]) -> Vec<AxisValue> {
    raw.iter().copied().map(AxisValue::from).collect()
}

fn axis(name: &str, section: Vec<AxisValue>) -> YAxis {
    let mut config = AxisConfig::new(vec![name.to_owned()], LayoutType::Proportion);
    config.name = Some(name.to_owned());
    let mut attribute = AxisAttribute::new();
    if !section.is_empty() {
        attribute.set_org_section(section).expect("org section");
    }
    YAxis::new(config, attribute)
}

fn with_user_section(mut axis: YAxis, section: Vec<AxisValue>) -> YAxis {
    axis.config.data_section = Some(section.clone());
    axis.attribute
        .set_custom_section(section)
        .expect("custom section");
    axis
}

#[test]
fn all_axes_are_resampled_to_the_longest_section() {
    let mut axes = vec![
        axis("a", numbers(&[0.0, 1.0, 2.0])),
        axis("b", numbers(&[0.0, 10.0, 20.0, 30.0, 40.0])),
        axis("c", numbers(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])),
    ];
    assert_eq!(max_segment_count(&axes), Some(7));

    let problems = reconcile_y_axes(&mut axes);
    assert!(problems.is_empty());
    for axis in &axes {
        assert_eq!(axis.attribute.section().len(), 7, "axis {}", axis.name());
    }

    // Steps above 1 are rounded up, so the last tick may overshoot.
    assert_eq!(
        axes[1].attribute.section(),
        numbers(&[0.0, 7.0, 14.0, 21.0, 28.0, 35.0, 42.0]).as_slice()
    );
    assert!(axes[2].attribute.custom_section().is_none());
}

#[test]
fn user_section_limits_the_target_count() {
    let mut axes = vec![
        with_user_section(
            axis("a", numbers(&[0.0, 1.0, 2.0])),
            numbers(&[0.0, 100.0]),
        ),
        axis("b", numbers(&[0.0, 10.0, 20.0, 30.0, 40.0])),
    ];
    assert_eq!(max_segment_count(&axes), Some(2));

    reconcile_y_axes(&mut axes);
    assert_eq!(axes[0].attribute.section(), numbers(&[0.0, 100.0]).as_slice());
    assert_eq!(axes[1].attribute.section(), numbers(&[0.0, 40.0]).as_slice());
}

#[test]
fn single_tick_target_keeps_the_first_value() {
    let mut axes = vec![
        with_user_section(axis("a", numbers(&[0.0, 1.0])), numbers(&[5.0])),
        axis("b", numbers(&[10.0, 20.0, 30.0])),
    ];
    reconcile_y_axes(&mut axes);
    assert_eq!(axes[1].attribute.section(), numbers(&[10.0]).as_slice());
}

#[test]
fn text_sections_are_reported_not_resampled() {
    let labels: Vec<AxisValue> = ["low", "high"].into_iter().map(AxisValue::from).collect();
    let mut axes = vec![
        axis("labels", labels.clone()),
        axis("numbers", numbers(&[0.0, 1.0, 2.0])),
    ];
    let problems = reconcile_y_axes(&mut axes);

    assert_eq!(
        problems,
        vec![ConfigProblem::NonNumericSection {
            axis: AxisId::Y("labels".to_owned())
        }]
    );
    assert_eq!(axes[0].attribute.section(), labels.as_slice());
}

#[test]
fn unbound_axes_are_ignored() {
    let mut axes = vec![
        axis("empty", Vec::new()),
        axis("b", numbers(&[0.0, 1.0, 2.0])),
    ];
    assert_eq!(max_segment_count(&axes), Some(3));
    assert!(reconcile_y_axes(&mut axes).is_empty());
    assert!(!axes[0].attribute.is_bound());

    let mut none: Vec<YAxis> = vec![axis("empty", Vec::new())];
    assert_eq!(max_segment_count(&none), None);
    assert!(reconcile_y_axes(&mut none).is_empty());
}

#[test]
fn uniform_section_keeps_fractional_steps() {
    assert_eq!(uniform_section(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(uniform_section(0.0, 10.0, 4), vec![0.0, 4.0, 8.0, 12.0]);
    assert_eq!(uniform_section(3.0, 9.0, 1), vec![3.0]);
    assert!(uniform_section(3.0, 9.0, 0).is_empty());
}
