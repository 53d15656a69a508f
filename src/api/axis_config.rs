use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{AxisValue, LayoutType};
use crate::error::{ChartError, ChartResult};

use super::GraphOptions;

/// Name resolved for a Y axis (or a graph binding) that declares no name.
pub const DEFAULT_Y_AXIS_NAME: &str = "default_axis_for_Y";

/// Resolved configuration of one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisConfig {
    /// Bound fields in declaration order; may repeat.
    pub fields: Vec<String>,
    pub layout_type: LayoutType,
    /// Y axes only; `None` stands for [`DEFAULT_Y_AXIS_NAME`].
    pub name: Option<String>,
    /// User override of the derived section.
    pub data_section: Option<Vec<AxisValue>>,
    /// Z axis only; overrides the depth of the bounding volume.
    pub depth: Option<f64>,
}

impl AxisConfig {
    #[must_use]
    pub fn new(fields: Vec<String>, layout_type: LayoutType) -> Self {
        Self {
            fields,
            layout_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn axis_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_Y_AXIS_NAME)
    }

    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Complete per-axis configuration of a chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisConfigSet {
    pub x_axis: AxisConfig,
    /// In declaration order; user-declared axes first, then axes created
    /// for graphs that named an undeclared axis.
    pub y_axes: SmallVec<[AxisConfig; 2]>,
    pub z_axis: AxisConfig,
    /// Z section used when the Z axis binds no field: one label per graph.
    pub z_labels: Vec<AxisValue>,
    /// Graphs kept after dropping those without a field.
    pub graphs: Vec<GraphOptions>,
    /// Set when a peak-forcing graph kind is present.
    pub peak_forced: bool,
}

impl AxisConfigSet {
    #[must_use]
    pub fn y_axis(&self, name: &str) -> Option<&AxisConfig> {
        self.y_axes.iter().find(|axis| axis.axis_name() == name)
    }

    /// Every field bound by a Y axis, in axis then field order.
    pub fn y_fields(&self) -> impl Iterator<Item = &str> {
        self.y_axes
            .iter()
            .flat_map(|axis| axis.fields.iter().map(String::as_str))
    }
}

/// Identifies an axis inside a configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y(String),
    Z,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x axis"),
            Self::Y(name) => write!(f, "y axis `{name}`"),
            Self::Z => f.write_str("z axis"),
        }
    }
}

/// A non-fatal defect found while building axis configuration or sections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigProblem {
    #[error("graph {index} (`{kind}`) has no field and was dropped")]
    GraphWithoutField { index: usize, kind: String },

    #[error("graph `{kind}` bound to `{fields}` has no values in the data set and was dropped")]
    GraphWithoutData { kind: String, fields: String },

    #[error("y axis {index} has no name and was discarded")]
    UnnamedYAxisDiscarded { index: usize },

    #[error("y axis `{name}` is not used by any graph and was discarded")]
    UnusedYAxis { name: String },

    #[error("y axis `{name}` has no field and was discarded")]
    EmptyYAxis { name: String },

    #[error("x axis has no field; configure coord.xAxis.field")]
    MissingXAxisField,

    #[error("{axis} has no values in the data set")]
    EmptyAxisData { axis: AxisId },

    #[error("{axis} mixes text values into a numeric section")]
    NonNumericSection { axis: AxisId },

    #[error("{axis} declares an empty dataSection, which is ignored")]
    EmptyDataSection { axis: AxisId },

    #[error("z axis depth {depth} must be finite and > 0, it is ignored")]
    InvalidDepth { depth: f64 },
}

/// Result of building axis configuration: the configuration that could be
/// derived plus every problem found along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisConfigReport {
    pub configs: AxisConfigSet,
    pub problems: Vec<ConfigProblem>,
}

impl AxisConfigReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Accepts the configuration only when no problem was found.
    pub fn into_strict(self) -> ChartResult<AxisConfigSet> {
        if self.problems.is_empty() {
            Ok(self.configs)
        } else {
            Err(ChartError::Configuration {
                problems: self.problems,
            })
        }
    }
}
