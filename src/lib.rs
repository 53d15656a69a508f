//! chart3d-rs: axis layout and coordinate mapping for 3D charts.
//!
//! Turns chart configuration and tabular data into per-axis sections, maps
//! data values to positions inside a bounding volume, and keeps the host
//! scene's camera and group placement in sync with that volume.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartOptions, CoordinateSystem};
pub use error::{ChartError, ChartResult};
