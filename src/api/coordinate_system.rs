use indexmap::IndexMap;
use nalgebra::{Point3, Vector3};
use tracing::{debug, warn};

use crate::core::{
    Axis, AxisAttribute, AxisProjection, AxisValue, BoundingBoxCalculator, BoundingVolume,
    DataSet, LayoutType, ScreenPoint, ValueTriple, Viewport, project_values, section,
    unique_values,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, SceneHost};

use super::{
    AxisConfig, AxisConfigSet, AxisId, ChartOptions, ConfigProblem, DEFAULT_Y_AXIS_NAME,
    GraphOptions, build_axis_configs, reconcile_y_axes,
};

/// A Y axis: its attribute together with the configuration it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxis {
    pub attribute: AxisAttribute,
    pub config: AxisConfig,
}

impl YAxis {
    #[must_use]
    pub fn new(config: AxisConfig, attribute: AxisAttribute) -> Self {
        Self { attribute, config }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.config.axis_name()
    }
}

/// Three-axis cartesian coordinate system placed inside a host scene.
///
/// Owns every axis attribute and the bounding volume. Each configuration,
/// data, origin or viewport change runs the full recompute (axes, Y-axis
/// reconciliation, bounding volume, world origin, camera) before returning,
/// so position queries always observe a consistent state.
#[derive(Debug)]
pub struct CoordinateSystem<H: SceneHost> {
    host: H,
    options: ChartOptions,
    configs: AxisConfigSet,
    data: DataSet,
    graphs: Vec<GraphOptions>,
    z_labels: Vec<AxisValue>,
    x_axis: AxisAttribute,
    y_axes: IndexMap<String, YAxis>,
    z_axis: AxisAttribute,
    colors: IndexMap<String, Color>,
    build_problems: Vec<ConfigProblem>,
    section_problems: Vec<ConfigProblem>,
    calculator: BoundingBoxCalculator,
    base_box: BoundingVolume,
    boundbox: BoundingVolume,
    center: Point3<f64>,
    offset: Vector3<f64>,
}

impl<H: SceneHost> CoordinateSystem<H> {
    /// Builds the axis configuration and runs the first full recompute.
    ///
    /// Configuration problems do not fail construction; they are logged and
    /// available through [`Self::problems`].
    pub fn new(host: H, options: ChartOptions, data: DataSet) -> ChartResult<Self> {
        let viewport = host.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let mut system = Self {
            host,
            options: ChartOptions::default(),
            configs: AxisConfigSet::default(),
            data,
            graphs: Vec::new(),
            z_labels: Vec::new(),
            x_axis: AxisAttribute::new(),
            y_axes: IndexMap::new(),
            z_axis: AxisAttribute::new(),
            colors: IndexMap::new(),
            build_problems: Vec::new(),
            section_problems: Vec::new(),
            calculator: BoundingBoxCalculator::default(),
            base_box: BoundingVolume::default(),
            boundbox: BoundingVolume::default(),
            center: Point3::origin(),
            offset: Vector3::zeros(),
        };
        system.configure(options);
        system.refresh_geometry();
        Ok(system)
    }

    /// Replaces configuration and data and rebuilds every axis.
    pub fn reset(&mut self, options: ChartOptions, data: DataSet) {
        self.data = data;
        self.configure(options);
        self.refresh_geometry();
    }

    /// Rebinds raw values of the existing axes to `data` without rebuilding
    /// the axis configuration.
    pub fn reset_data(&mut self, data: DataSet) {
        self.data = data;
        self.x_axis.rebind(&self.data);
        self.z_axis.rebind(&self.data);
        for axis in self.y_axes.values_mut() {
            axis.attribute.rebind(&self.data);
        }
        self.derive_sections();
        self.refresh_geometry();
    }

    /// Applies a new viewport to the host and recomputes the geometry.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.host.resize(viewport)?;
        self.refresh_geometry();
        Ok(())
    }

    /// Installs a new offset between the host base box and the local space.
    pub fn update_origin(&mut self, offset: Vector3<f64>) {
        self.offset = offset;
        self.refresh_geometry();
    }

    #[must_use]
    pub fn x_axis_position(&self, value: &AxisValue) -> f64 {
        self.x_projection().position(value)
    }

    #[must_use]
    pub fn y_axis_position(&self, value: &AxisValue, axis: &YAxis) -> f64 {
        self.y_projection(axis).position(value)
    }

    #[must_use]
    pub fn z_axis_position(&self, value: &AxisValue) -> f64 {
        self.z_projection().position(value)
    }

    /// Maps value triples to local positions against `y_axis`.
    #[must_use]
    pub fn project_points(&self, values: &[ValueTriple], y_axis: &YAxis) -> Vec<Point3<f64>> {
        project_values(
            values,
            self.x_projection(),
            self.y_projection(y_axis),
            self.z_projection(),
        )
    }

    /// Resolves a Y axis by name, falling back to the first configured one
    /// when the name is absent or unknown.
    #[must_use]
    pub fn y_axis(&self, name: Option<&str>) -> Option<&YAxis> {
        self.y_axes
            .get(name.unwrap_or(DEFAULT_Y_AXIS_NAME))
            .or_else(|| self.y_axes.first().map(|(_, axis)| axis))
    }

    pub fn y_axes(&self) -> impl Iterator<Item = &YAxis> {
        self.y_axes.values()
    }

    /// Nominal cell size per axis, used to size bar-like primitives.
    /// The Y component follows the default Y axis.
    #[must_use]
    pub fn ceil_size(&self) -> Vector3<f64> {
        let y = self
            .y_axis(None)
            .map_or(0.0, |axis| self.y_projection(axis).cell_size());
        Vector3::new(
            self.x_projection().cell_size(),
            y,
            self.z_projection().cell_size(),
        )
    }

    #[must_use]
    pub fn boundbox(&self) -> &BoundingVolume {
        &self.boundbox
    }

    /// Box midpoint with its Z component negated.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Local origin of the coordinate space.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        self.boundbox.min
    }

    /// World position of the coordinate group.
    #[must_use]
    pub fn world_origin(&self) -> Point3<f64> {
        self.host.group_position()
    }

    #[must_use]
    pub fn offset(&self) -> Vector3<f64> {
        self.offset
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisAttribute {
        &self.x_axis
    }

    #[must_use]
    pub fn z_axis(&self) -> &AxisAttribute {
        &self.z_axis
    }

    #[must_use]
    pub fn configs(&self) -> &AxisConfigSet {
        &self.configs
    }

    /// Graphs that are laid out: configured graphs whose fields have data.
    #[must_use]
    pub fn graphs(&self) -> &[GraphOptions] {
        &self.graphs
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn colors(&self) -> &IndexMap<String, Color> {
        &self.colors
    }

    /// Problems found by the last configuration build and section pass.
    pub fn problems(&self) -> impl Iterator<Item = &ConfigProblem> {
        self.build_problems.iter().chain(&self.section_problems)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Projects a local-space point through the host camera into viewport
    /// pixels, origin at the top-left corner.
    #[must_use]
    pub fn position_to_screen(&self, local: &Point3<f64>) -> ScreenPoint {
        let ndc = self.host.camera().project(&self.local_to_world(local));
        let viewport = self.host.viewport();
        let half_width = f64::from(viewport.width) / 2.0;
        let half_height = f64::from(viewport.height) / 2.0;
        ScreenPoint::new(
            ndc.x * half_width + half_width,
            -(ndc.y * half_height) + half_height,
        )
    }

    /// World length covered by one screen pixel around `world` (default:
    /// the near-bottom-left corner of the host base box).
    #[must_use]
    pub fn ratio_pixel_to_world(&self, world: Option<Point3<f64>>) -> f64 {
        let world = world.unwrap_or_else(|| {
            let base = self.host.base_bounding_box();
            BoundingBoxCalculator::world_origin(&base, &Vector3::zeros())
        });
        let camera = self.host.camera();
        let distance = camera.distance_to(&world);
        let visible_height = 2.0 * distance * (camera.fov_degrees().to_radians() / 2.0).tan();
        visible_height / f64::from(self.host.viewport().height)
    }

    fn x_projection(&self) -> AxisProjection<'_> {
        AxisProjection::new(
            self.x_axis.section(),
            self.configs.x_axis.layout_type,
            self.boundbox.extent(Axis::X),
        )
    }

    fn y_projection<'a>(&'a self, axis: &'a YAxis) -> AxisProjection<'a> {
        AxisProjection::new(
            axis.attribute.section(),
            axis.config.layout_type,
            self.boundbox.extent(Axis::Y),
        )
    }

    fn z_projection(&self) -> AxisProjection<'_> {
        AxisProjection::new(
            self.z_axis.section(),
            self.configs.z_axis.layout_type,
            self.boundbox.extent(Axis::Z),
        )
    }

    fn local_to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        self.host.group_position() + local.coords
    }

    fn configure(&mut self, options: ChartOptions) {
        let report = build_axis_configs(&options);
        self.options = options;
        self.configs = report.configs;
        self.build_problems = report.problems;
        self.calculator = BoundingBoxCalculator::new(self.configs.z_axis.depth);

        self.x_axis = AxisAttribute::new();
        self.x_axis.set_field(&self.configs.x_axis.fields, &self.data);
        self.z_axis = AxisAttribute::new();
        self.z_axis.set_field(&self.configs.z_axis.fields, &self.data);
        self.y_axes = self
            .configs
            .y_axes
            .iter()
            .map(|config| {
                let mut attribute = AxisAttribute::new();
                attribute.set_field(&config.fields, &self.data);
                (
                    config.axis_name().to_owned(),
                    YAxis::new(config.clone(), attribute),
                )
            })
            .collect();

        self.derive_sections();
    }

    /// Recomputes every section from the bound raw values, then reconciles
    /// the Y axes.
    fn derive_sections(&mut self) {
        let mut problems = Vec::new();

        (self.graphs, self.z_labels) = graphs_with_data(&self.configs, &self.data, &mut problems);

        let x_config = &self.configs.x_axis;
        if x_config.has_fields() {
            install_outer_section(AxisId::X, &mut self.x_axis, x_config, &mut problems);
        } else {
            self.x_axis.clear_sections();
        }

        self.colors = self
            .configs
            .y_fields()
            .enumerate()
            .map(|(index, field)| (field.to_owned(), self.host.theme().color(index)))
            .collect();

        for axis in self.y_axes.values_mut() {
            install_y_section(axis, &mut problems);
            axis.attribute.set_colors(self.colors.clone());
        }
        problems.extend(reconcile_y_axes(self.y_axes.values_mut()));

        let z_config = &self.configs.z_axis;
        if z_config.has_fields() {
            install_outer_section(AxisId::Z, &mut self.z_axis, z_config, &mut problems);
        } else {
            self.z_axis.clear_sections();
            if let Err(err) = self
                .z_axis
                .set_org_section(self.z_labels.clone())
            {
                debug!(error = %err, "z axis has neither field nor graph labels");
            }
            install_user_section(AxisId::Z, &mut self.z_axis, z_config, &mut problems);
        }

        self.section_problems = problems;
    }

    fn refresh_geometry(&mut self) {
        self.base_box = self.host.base_bounding_box();
        self.boundbox = self.calculator.local_box(&self.base_box, &self.offset);
        self.center = BoundingBoxCalculator::local_center(&self.boundbox);
        self.host
            .set_group_position(BoundingBoxCalculator::world_origin(
                &self.base_box,
                &self.offset,
            ));
        self.update_camera();
        debug!(
            width = self.boundbox.extent(Axis::X),
            height = self.boundbox.extent(Axis::Y),
            depth = self.boundbox.extent(Axis::Z),
            "recomputed bounding volume"
        );
    }

    /// Re-aims the camera at the volume center, keeping its distance and
    /// placing it on the sphere given by the orbit angles.
    fn update_camera(&mut self) {
        let center = self.local_to_world(&self.center);
        let orbit = *self.host.orbit();
        let alpha = orbit.alpha.to_radians();
        let beta = orbit.beta.to_radians();

        let camera = self.host.camera_mut();
        let distance = camera.distance_to(&center);
        let horizontal = distance * alpha.cos();
        let offset = Vector3::new(
            horizontal * beta.sin(),
            distance * alpha.sin(),
            horizontal * beta.cos(),
        );
        camera.position = center + offset;
        camera.look_at(center);

        self.host.orbit_mut().target = center;
    }
}

/// Keeps the configured graphs whose own fields collect at least one value
/// from `data`, together with their Z labels.
fn graphs_with_data(
    configs: &AxisConfigSet,
    data: &DataSet,
    problems: &mut Vec<ConfigProblem>,
) -> (Vec<GraphOptions>, Vec<AxisValue>) {
    let mut graphs = Vec::with_capacity(configs.graphs.len());
    let mut labels = Vec::with_capacity(configs.z_labels.len());
    for (graph, label) in configs.graphs.iter().zip(&configs.z_labels) {
        let fields = graph.fields();
        let has_data = fields
            .iter()
            .any(|field| data.column(field).is_some_and(|column| !column.is_empty()));
        if !has_data {
            warn!(kind = %graph.kind, fields = %label, "dropping graph without data");
            problems.push(ConfigProblem::GraphWithoutData {
                kind: graph.kind.clone(),
                fields: fields.join(","),
            });
            continue;
        }
        graphs.push(graph.clone());
        labels.push(label.clone());
    }
    (graphs, labels)
}

/// Derives the section of the X or Z axis from its raw values and applies
/// the user section.
fn install_outer_section(
    axis: AxisId,
    attribute: &mut AxisAttribute,
    config: &AxisConfig,
    problems: &mut Vec<ConfigProblem>,
) {
    attribute.clear_custom_section();
    let derived = if config.layout_type == LayoutType::Proportion {
        attribute.numeric_raw_values().map(|mut samples| {
            if samples.len() == 1 {
                let single = samples[0];
                samples.extend([0.0, single * 2.0]);
            }
            samples.sort_by(f64::total_cmp);
            samples
        })
    } else {
        Some(Vec::new())
    };

    let section = match derived {
        None => {
            warn!(%axis, "proportion axis has text values");
            problems.push(ConfigProblem::NonNumericSection { axis: axis.clone() });
            Vec::new()
        }
        Some(samples) if config.layout_type == LayoutType::Proportion && !samples.is_empty() => {
            match section(&samples) {
                Ok(ticks) => ticks.into_iter().map(AxisValue::number).collect(),
                Err(err) => {
                    warn!(%axis, error = %err, "failed to section axis");
                    Vec::new()
                }
            }
        }
        Some(_) => unique_values(attribute.raw_values().iter().cloned()),
    };

    install_org_section(axis.clone(), attribute, section, problems);
    install_user_section(axis, attribute, config, problems);
}

fn install_y_section(axis: &mut YAxis, problems: &mut Vec<ConfigProblem>) {
    let id = AxisId::Y(axis.name().to_owned());
    let attribute = &mut axis.attribute;
    attribute.clear_custom_section();

    let section = if axis.config.layout_type == LayoutType::Proportion {
        match attribute.numeric_raw_values() {
            None => {
                warn!(axis = %id, "proportion axis has text values");
                problems.push(ConfigProblem::NonNumericSection { axis: id.clone() });
                Vec::new()
            }
            Some(mut samples) => {
                if samples.len() == 1 {
                    samples.push(samples[0] * 2.0);
                }
                if samples.is_empty() {
                    Vec::new()
                } else {
                    match section(&samples) {
                        Ok(ticks) => ticks.into_iter().map(AxisValue::number).collect(),
                        Err(err) => {
                            warn!(axis = %id, error = %err, "failed to section axis");
                            Vec::new()
                        }
                    }
                }
            }
        }
    } else {
        unique_values(attribute.raw_values().iter().cloned())
    };

    install_org_section(id.clone(), attribute, section, problems);
    install_user_section(id, attribute, &axis.config, problems);
}

fn install_org_section(
    axis: AxisId,
    attribute: &mut AxisAttribute,
    section: Vec<AxisValue>,
    problems: &mut Vec<ConfigProblem>,
) {
    if let Err(err) = attribute.set_org_section(section) {
        // An axis without data keeps no section and maps every value to 0.
        warn!(%axis, error = %err, "axis has no data");
        attribute.clear_sections();
        problems.push(ConfigProblem::EmptyAxisData { axis });
    }
}

fn install_user_section(
    axis: AxisId,
    attribute: &mut AxisAttribute,
    config: &AxisConfig,
    problems: &mut Vec<ConfigProblem>,
) {
    let Some(section) = &config.data_section else {
        return;
    };
    if let Err(err) = attribute.set_custom_section(section.clone()) {
        warn!(%axis, error = %err, "ignoring user data section");
        problems.push(ConfigProblem::EmptyDataSection { axis });
    }
}
