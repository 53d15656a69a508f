use nalgebra::{Point3, Vector3};

use crate::core::Axis;

/// Axis-aligned box in the coordinate system's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Default for BoundingVolume {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }
}

impl BoundingVolume {
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin with the given full extents.
    #[must_use]
    pub fn centered(width: f64, height: f64, depth: f64) -> Self {
        let half = Vector3::new(width, height, depth) / 2.0;
        Self {
            min: Point3::from(-half),
            max: Point3::from(half),
        }
    }

    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Length of the box along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Derives the renderable local box from the host's base box.
///
/// The local box always starts at the origin; depth grows away from the
/// viewer, so the reported center has its Z component negated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBoxCalculator {
    depth: Option<f64>,
}

impl BoundingBoxCalculator {
    #[must_use]
    pub fn new(depth: Option<f64>) -> Self {
        Self { depth }
    }

    #[must_use]
    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    /// Base box size shrunk by `offset`, with `max.z` replaced by the
    /// configured depth when present.
    #[must_use]
    pub fn local_box(&self, base: &BoundingVolume, offset: &Vector3<f64>) -> BoundingVolume {
        let mut max = Point3::from(base.size() - *offset);
        if let Some(depth) = self.depth {
            max.z = depth;
        }
        BoundingVolume::new(Point3::origin(), max)
    }

    #[must_use]
    pub fn local_center(local: &BoundingVolume) -> Point3<f64> {
        let mut center = local.midpoint();
        center.z = -center.z;
        center
    }

    /// World placement of the local origin: the base box's near-bottom-left
    /// corner (`min` with `z = max.z`) translated by `offset`.
    #[must_use]
    pub fn world_origin(base: &BoundingVolume, offset: &Vector3<f64>) -> Point3<f64> {
        let mut origin = base.min;
        origin.z = base.max.z;
        origin + *offset
    }
}
