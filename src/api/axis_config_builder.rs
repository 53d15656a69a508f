use smallvec::SmallVec;
use tracing::{debug, error, warn};

use crate::core::{AxisValue, LayoutType};

use super::validation::{validate_data_section, validate_depth};
use super::{
    AxisConfig, AxisConfigReport, AxisConfigSet, AxisId, AxisOptions, ChartOptions,
    ConfigProblem, DEFAULT_Y_AXIS_NAME, GraphOptions,
};

const DEFAULT_X_LAYOUT: LayoutType = LayoutType::Rule;
const DEFAULT_Y_LAYOUT: LayoutType = LayoutType::Proportion;
const DEFAULT_Z_LAYOUT: LayoutType = LayoutType::Rule;

/// Y axis under construction; `used` tracks whether any graph referenced it.
struct PendingYAxis {
    config: AxisConfig,
    layout_type: Option<LayoutType>,
    used: bool,
}

/// Derives the X, Y and Z axis configurations from user axis options and
/// the field bindings of every graph.
///
/// Never fails: graphs and axes that cannot be used are left out and
/// reported in [`AxisConfigReport::problems`].
#[must_use]
pub fn build_axis_configs(options: &ChartOptions) -> AxisConfigReport {
    let mut problems = Vec::new();

    let peak_forced = options
        .graphs
        .iter()
        .any(GraphOptions::forces_peak_layout);

    let x_axis = build_outer_axis(
        AxisId::X,
        &options.coord.x_axis,
        DEFAULT_X_LAYOUT,
        peak_forced,
        &mut problems,
    );
    if !x_axis.has_fields() {
        error!("x axis has no field; configure coord.xAxis.field");
        problems.push(ConfigProblem::MissingXAxisField);
    }

    let mut z_axis = build_outer_axis(
        AxisId::Z,
        &options.coord.z_axis,
        DEFAULT_Z_LAYOUT,
        peak_forced,
        &mut problems,
    );
    z_axis.depth = validate_depth(&options.coord.z_axis, &mut problems);

    let mut pending = declared_y_axes(&options.coord.y_axis, &mut problems);

    let mut graphs = Vec::with_capacity(options.graphs.len());
    let mut z_labels = Vec::with_capacity(options.graphs.len());
    for (index, graph) in options.graphs.iter().enumerate() {
        if !graph.has_field() {
            warn!(index, kind = %graph.kind, "dropping graph without field");
            problems.push(ConfigProblem::GraphWithoutField {
                index,
                kind: graph.kind.clone(),
            });
            continue;
        }

        let fields = graph.fields();
        let name = graph.y_axis_name.as_deref().filter(|name| !name.is_empty());
        let axis_name = name.unwrap_or(DEFAULT_Y_AXIS_NAME);
        match pending
            .iter_mut()
            .find(|axis| axis.config.axis_name() == axis_name)
        {
            Some(axis) => {
                axis.config.fields.extend(fields.iter().cloned());
                axis.used = true;
            }
            None => pending.push(PendingYAxis {
                config: AxisConfig {
                    fields: fields.clone(),
                    name: name.map(str::to_owned),
                    ..AxisConfig::default()
                },
                layout_type: None,
                used: true,
            }),
        }

        z_labels.push(AxisValue::Text(fields.join(",")));
        graphs.push(graph.clone());
    }

    let mut y_axes = SmallVec::new();
    for axis in pending {
        let name = axis.config.axis_name().to_owned();
        if !axis.used {
            warn!(axis = %name, "discarding y axis not used by any graph");
            problems.push(ConfigProblem::UnusedYAxis { name });
            continue;
        }
        if !axis.config.has_fields() {
            warn!(axis = %name, "discarding y axis without field");
            problems.push(ConfigProblem::EmptyYAxis { name });
            continue;
        }
        y_axes.push(AxisConfig {
            layout_type: axis.layout_type.unwrap_or(DEFAULT_Y_LAYOUT),
            ..axis.config
        });
    }

    debug!(
        y_axes = y_axes.len(),
        graphs = graphs.len(),
        peak_forced,
        problems = problems.len(),
        "built axis configuration"
    );

    AxisConfigReport {
        configs: AxisConfigSet {
            x_axis,
            y_axes,
            z_axis,
            z_labels,
            graphs,
            peak_forced,
        },
        problems,
    }
}

fn build_outer_axis(
    axis: AxisId,
    options: &AxisOptions,
    default_layout: LayoutType,
    peak_forced: bool,
    problems: &mut Vec<ConfigProblem>,
) -> AxisConfig {
    let layout_type = if peak_forced {
        LayoutType::Peak
    } else {
        options.layout_type.unwrap_or(default_layout)
    };
    AxisConfig {
        fields: options.fields(),
        layout_type,
        name: None,
        data_section: validate_data_section(axis, options, problems),
        depth: None,
    }
}

/// Normalizes user-declared Y axes. The first axis may stay unnamed and
/// becomes the default axis; later unnamed axes are discarded.
fn declared_y_axes(
    declared: &[AxisOptions],
    problems: &mut Vec<ConfigProblem>,
) -> Vec<PendingYAxis> {
    let mut pending: Vec<PendingYAxis> = Vec::with_capacity(declared.len());
    for (index, options) in declared.iter().enumerate() {
        let name = options.name.as_deref().filter(|name| !name.is_empty());
        if name.is_none() && index > 0 {
            warn!(index, "discarding unnamed y axis");
            problems.push(ConfigProblem::UnnamedYAxisDiscarded { index });
            continue;
        }
        let config = AxisConfig {
            fields: options.fields(),
            layout_type: DEFAULT_Y_LAYOUT,
            name: name.map(str::to_owned),
            data_section: validate_data_section(
                AxisId::Y(name.unwrap_or(DEFAULT_Y_AXIS_NAME).to_owned()),
                options,
                problems,
            ),
            depth: None,
        };
        pending.push(PendingYAxis {
            config,
            layout_type: options.layout_type,
            used: false,
        });
    }
    pending
}
