mod camera;
mod color;
mod headless_host;
mod theme;

pub use camera::{Camera, OrbitControls};
pub use color::Color;
pub use headless_host::HeadlessHost;
pub use theme::{THEME_FALLBACK_COLOR, Theme};

use nalgebra::Point3;

use crate::core::{BoundingVolume, Viewport};
use crate::error::ChartResult;

/// Contract implemented by the 3D scene that hosts the coordinate system.
///
/// The host owns the viewport, camera, orbit controls and the group node the
/// coordinate system is placed in. The coordinate system only reads the base
/// box and drives camera, orbit target and group placement through this trait.
pub trait SceneHost {
    fn viewport(&self) -> Viewport;

    /// Applies a new viewport size, including the camera aspect ratio.
    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;

    /// World-space box available to the coordinate system's group.
    fn base_bounding_box(&self) -> BoundingVolume;

    fn camera(&self) -> &Camera;

    fn camera_mut(&mut self) -> &mut Camera;

    fn orbit(&self) -> &OrbitControls;

    fn orbit_mut(&mut self) -> &mut OrbitControls;

    fn theme(&self) -> &Theme;

    fn group_position(&self) -> Point3<f64>;

    fn set_group_position(&mut self, position: Point3<f64>);
}
