mod axis_config;
mod axis_config_builder;
mod chart_options;
mod coordinate_system;
mod validation;
mod y_axis_reconciler;

pub use axis_config::{
    AxisConfig, AxisConfigReport, AxisConfigSet, AxisId, ConfigProblem, DEFAULT_Y_AXIS_NAME,
};
pub use axis_config_builder::build_axis_configs;
pub use chart_options::{
    AxisOptions, ChartOptions, CoordOptions, FieldBinding, GraphOptions,
    PEAK_FORCING_GRAPH_KINDS,
};
pub use coordinate_system::{CoordinateSystem, YAxis};
pub use y_axis_reconciler::{max_segment_count, reconcile_y_axes, uniform_section};
