use nalgebra::Point3;

use crate::core::{BoundingVolume, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Camera, OrbitControls, SceneHost, Theme};

const DEFAULT_FOV_DEGREES: f64 = 45.0;
const DEFAULT_NEAR: f64 = 0.1;
const DEFAULT_FAR: f64 = 100_000.0;
const CAMERA_DISTANCE_FACTOR: f64 = 1.5;

/// Scene host without a rendering backend, used by tests and headless usage.
///
/// The base box is sized after the viewport (`width × height × box_depth`)
/// and centered on the world origin, like a canvas-sized scene group.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessHost {
    viewport: Viewport,
    box_depth: f64,
    camera: Camera,
    orbit: OrbitControls,
    theme: Theme,
    group_position: Point3<f64>,
}

impl HeadlessHost {
    /// Creates a host whose box depth matches the viewport height.
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Self::with_box_depth(viewport, f64::from(viewport.height))
    }

    pub fn with_box_depth(viewport: Viewport, box_depth: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !box_depth.is_finite() || box_depth < 0.0 {
            return Err(ChartError::InvalidData(
                "host box depth must be finite and >= 0".to_owned(),
            ));
        }

        let distance = f64::from(viewport.width.max(viewport.height)) * CAMERA_DISTANCE_FACTOR;
        let camera = Camera::perspective(
            DEFAULT_FOV_DEGREES,
            viewport.aspect(),
            DEFAULT_NEAR,
            DEFAULT_FAR,
        )?
        .with_position(Point3::new(0.0, 0.0, distance));

        Ok(Self {
            viewport,
            box_depth,
            camera,
            orbit: OrbitControls::default(),
            theme: Theme::default(),
            group_position: Point3::origin(),
        })
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_orbit(mut self, orbit: OrbitControls) -> Self {
        self.orbit = orbit;
        self
    }

    #[must_use]
    pub fn box_depth(&self) -> f64 {
        self.box_depth
    }
}

impl SceneHost for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.camera.set_aspect(viewport.aspect())?;
        self.viewport = viewport;
        Ok(())
    }

    fn base_bounding_box(&self) -> BoundingVolume {
        BoundingVolume::centered(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
            self.box_depth,
        )
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    fn orbit_mut(&mut self) -> &mut OrbitControls {
        &mut self.orbit
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn group_position(&self) -> Point3<f64> {
        self.group_position
    }

    fn set_group_position(&mut self, position: Point3<f64>) {
        self.group_position = position;
    }
}
