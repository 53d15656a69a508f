use nalgebra::{Isometry3, Perspective3, Point3, Vector3};

use crate::error::{ChartError, ChartResult};

/// Perspective camera owned by the host scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub up: Vector3<f64>,
    target: Point3<f64>,
    fov_degrees: f64,
    aspect: f64,
    near: f64,
    far: f64,
}

impl Camera {
    pub fn perspective(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> ChartResult<Self> {
        validate_frustum(fov_degrees, aspect, near, far)?;
        Ok(Self {
            position: Point3::new(0.0, 0.0, 1.0),
            up: Vector3::y(),
            target: Point3::origin(),
            fov_degrees,
            aspect,
            near,
            far,
        })
    }

    #[must_use]
    pub fn with_position(mut self, position: Point3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn look_at(&mut self, target: Point3<f64>) {
        self.target = target;
    }

    #[must_use]
    pub fn target(&self) -> Point3<f64> {
        self.target
    }

    #[must_use]
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f64) -> ChartResult<()> {
        validate_frustum(self.fov_degrees, aspect, self.near, self.far)?;
        self.aspect = aspect;
        Ok(())
    }

    #[must_use]
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }

    #[must_use]
    pub fn view(&self) -> Isometry3<f64> {
        Isometry3::look_at_rh(&self.position, &self.target, &self.up)
    }

    #[must_use]
    pub fn projection(&self) -> Perspective3<f64> {
        Perspective3::new(
            self.aspect,
            self.fov_degrees.to_radians(),
            self.near,
            self.far,
        )
    }

    /// Projects a world-space point into normalized device coordinates.
    #[must_use]
    pub fn project(&self, world: &Point3<f64>) -> Point3<f64> {
        let eye_space = self.view().transform_point(world);
        self.projection().project_point(&eye_space)
    }
}

fn validate_frustum(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> ChartResult<()> {
    if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
        return Err(ChartError::InvalidData(
            "camera fov must be finite and in (0, 180) degrees".to_owned(),
        ));
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(ChartError::InvalidData(
            "camera aspect must be finite and > 0".to_owned(),
        ));
    }
    if !near.is_finite() || !far.is_finite() || near <= 0.0 || far <= near {
        return Err(ChartError::InvalidData(
            "camera clip planes must satisfy 0 < near < far".to_owned(),
        ));
    }
    Ok(())
}

/// Orbit state driven by user interaction. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    /// Polar (elevation) angle.
    pub alpha: f64,
    /// Azimuth angle.
    pub beta: f64,
    pub target: Point3<f64>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            alpha: 20.0,
            beta: 40.0,
            target: Point3::origin(),
        }
    }
}

impl OrbitControls {
    #[must_use]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            target: Point3::origin(),
        }
    }
}
