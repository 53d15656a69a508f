pub mod axis_attribute;
pub mod bounds;
pub mod dataset;
pub mod layout;
pub mod section;
pub mod types;

pub use axis_attribute::{AxisAttribute, unique_values};
pub use bounds::{BoundingBoxCalculator, BoundingVolume};
pub use dataset::DataSet;
pub use layout::{AxisProjection, LayoutType, ValueTriple, numeric_extent, project_values};
pub use section::{SECTION_TARGET_INTERVALS, section};
pub use types::{Axis, AxisValue, ScreenPoint, Viewport};
