use crate::core::AxisValue;

use super::{AxisId, AxisOptions, ConfigProblem};

pub(super) fn validate_data_section(
    axis: AxisId,
    options: &AxisOptions,
    problems: &mut Vec<ConfigProblem>,
) -> Option<Vec<AxisValue>> {
    match &options.data_section {
        Some(section) if section.is_empty() => {
            problems.push(ConfigProblem::EmptyDataSection { axis });
            None
        }
        Some(section) => Some(section.clone()),
        None => None,
    }
}

pub(super) fn validate_depth(
    options: &AxisOptions,
    problems: &mut Vec<ConfigProblem>,
) -> Option<f64> {
    let depth = options.depth?;
    if !depth.is_finite() || depth <= 0.0 {
        problems.push(ConfigProblem::InvalidDepth { depth });
        return None;
    }
    Some(depth)
}
