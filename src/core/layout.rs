use nalgebra::Point3;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::AxisValue;

/// Policy that turns an axis value into a position along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Evenly spaced by ordinal index, first value at 0 and last at the full range.
    #[default]
    Rule,
    /// Placed by magnitude between the section's minimum and maximum.
    Proportion,
    /// Centered inside one equal-width cell per section value.
    Peak,
}

/// Position mapping for one axis: its active section, layout policy and
/// the length of the bounding volume along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProjection<'a> {
    section: &'a [AxisValue],
    layout: LayoutType,
    range: f64,
}

impl<'a> AxisProjection<'a> {
    #[must_use]
    pub fn new(section: &'a [AxisValue], layout: LayoutType, range: f64) -> Self {
        Self {
            section,
            layout,
            range,
        }
    }

    #[must_use]
    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Maps `value` to a position in `[0, range]`.
    ///
    /// A single-value section centers its value. Values missing from the
    /// section resolve to index `-1`, and any non-finite result (unbound
    /// axis, zero-width range, text on a proportion axis) becomes `0`.
    #[must_use]
    pub fn position(&self, value: &AxisValue) -> f64 {
        let count = self.section.len();
        if count == 0 {
            return 0.0;
        }
        if count == 1 {
            return finite_or_zero(self.range / 2.0);
        }

        let index = self
            .section
            .iter()
            .position(|candidate| candidate == value)
            .map_or(-1.0, |index| index as f64);
        let count = count as f64;

        let position = match self.layout {
            LayoutType::Rule => index / (count - 1.0) * self.range,
            LayoutType::Proportion => match (value.as_f64(), self.numeric_extent()) {
                (Some(value), Some((min, max))) => self.range * ((value - min) / (max - min)),
                _ => f64::NAN,
            },
            LayoutType::Peak => {
                let cell = self.range / count;
                cell * (index + 1.0) - cell / 2.0
            }
        };
        finite_or_zero(position)
    }

    /// Nominal per-value cell size used to size bar-like primitives.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        let count = self.section.len() as f64;
        let cells = match self.layout {
            LayoutType::Peak => count,
            LayoutType::Rule | LayoutType::Proportion => count + 1.0,
        };
        finite_or_zero(self.range / cells)
    }

    fn numeric_extent(&self) -> Option<(f64, f64)> {
        numeric_extent(self.section)
    }
}

/// Smallest and largest numeric value of `section`; text values are ignored.
#[must_use]
pub fn numeric_extent(section: &[AxisValue]) -> Option<(f64, f64)> {
    section
        .iter()
        .filter_map(AxisValue::as_f64)
        .fold(None, |extent, value| match extent {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        })
}

/// One data point expressed in axis values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTriple {
    pub x: AxisValue,
    pub y: AxisValue,
    pub z: AxisValue,
}

impl ValueTriple {
    #[must_use]
    pub fn new(x: impl Into<AxisValue>, y: impl Into<AxisValue>, z: impl Into<AxisValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

/// Maps value triples to local positions, one projection per axis.
#[must_use]
pub fn project_values(
    values: &[ValueTriple],
    x: AxisProjection<'_>,
    y: AxisProjection<'_>,
    z: AxisProjection<'_>,
) -> Vec<Point3<f64>> {
    let project = |triple: &ValueTriple| {
        Point3::new(
            x.position(&triple.x),
            y.position(&triple.y),
            z.position(&triple.z),
        )
    };

    // Output order always matches input order.
    #[cfg(feature = "parallel-projection")]
    {
        values.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        values.iter().map(project).collect()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
