use tracing::{debug, warn};

use crate::core::AxisValue;

use super::{AxisId, ConfigProblem, YAxis};

/// Tick count every Y axis is resampled to: the largest section length,
/// unless axes with a user `dataSection` constrain it to their shortest one.
#[must_use]
pub fn max_segment_count<'a>(axes: impl IntoIterator<Item = &'a YAxis>) -> Option<usize> {
    let mut max_across = None::<usize>;
    let mut user_minimum = usize::MAX;
    for axis in axes {
        let len = axis.attribute.section().len();
        if len == 0 {
            continue;
        }
        max_across = Some(max_across.map_or(len, |max| max.max(len)));
        if let Some(section) = &axis.config.data_section {
            user_minimum = user_minimum.min(section.len());
        }
    }
    max_across.map(|max| max.min(user_minimum))
}

/// Uniform-step section of exactly `count` ticks starting at `first`.
///
/// The step spans `first..=last` over `count - 1` intervals and is rounded
/// up to an integer only when it exceeds 1.
#[must_use]
pub fn uniform_section(first: f64, last: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![first; count];
    }
    let mut step = (last - first) / (count - 1) as f64;
    if step > 1.0 {
        step = step.ceil();
    }
    (0..count).map(|i| first + i as f64 * step).collect()
}

/// Forces every bound Y axis onto the same tick count so that primitives
/// laid out against different Y axes stay aligned.
///
/// Axes whose section already has the target length are left untouched.
/// Text sections cannot be resampled and are reported instead.
pub fn reconcile_y_axes<'a>(axes: impl IntoIterator<Item = &'a mut YAxis>) -> Vec<ConfigProblem> {
    let mut axes: Vec<&mut YAxis> = axes.into_iter().collect();
    let mut problems = Vec::new();
    let Some(target) = max_segment_count(axes.iter().map(|axis| &**axis)) else {
        return problems;
    };

    for axis in axes.iter_mut().filter(|axis| axis.attribute.is_bound()) {
        let section = axis.attribute.section();
        if section.len() == target {
            continue;
        }

        let bounds = section
            .first()
            .and_then(AxisValue::as_f64)
            .zip(section.last().and_then(AxisValue::as_f64));
        let Some((first, last)) = bounds else {
            let name = axis.config.axis_name().to_owned();
            warn!(axis = %name, "cannot resample text section of y axis");
            problems.push(ConfigProblem::NonNumericSection {
                axis: AxisId::Y(name),
            });
            continue;
        };

        let resampled: Vec<AxisValue> = uniform_section(first, last, target)
            .into_iter()
            .map(AxisValue::number)
            .collect();
        debug!(
            axis = axis.config.axis_name(),
            from = section.len(),
            to = target,
            "resampled y axis section"
        );
        if let Err(err) = axis.attribute.set_custom_section(resampled) {
            warn!(error = %err, "skipping y axis resample");
        }
    }

    problems
}
