use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{AxisValue, LayoutType};
use crate::error::{ChartError, ChartResult};

/// Graph kinds drawn as volumetric bars; their presence forces `peak`
/// layout on the X and Z axes of the whole chart.
pub const PEAK_FORCING_GRAPH_KINDS: &[&str] = &["bar3d"];

/// Field binding declared by an axis or a graph: one field or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldBinding {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldBinding {
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::Single(field) if field.is_empty() => Vec::new(),
            Self::Single(field) => vec![field.clone()],
            Self::Multiple(fields) => fields.iter().filter(|f| !f.is_empty()).cloned().collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Display label: multiple fields are joined with `,`.
    #[must_use]
    pub fn label(&self) -> String {
        self.fields().join(",")
    }
}

impl From<&str> for FieldBinding {
    fn from(field: &str) -> Self {
        Self::Single(field.to_owned())
    }
}

impl From<Vec<&str>> for FieldBinding {
    fn from(fields: Vec<&str>) -> Self {
        Self::Multiple(fields.into_iter().map(str::to_owned).collect())
    }
}

/// User options for one axis.
///
/// `name` is only meaningful on Y axes and `depth` only on the Z axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<LayoutType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_section: Option<Vec<AxisValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl AxisOptions {
    #[must_use]
    pub fn new(field: impl Into<FieldBinding>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout_type: LayoutType) -> Self {
        self.layout_type = Some(layout_type);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_data_section(mut self, section: impl IntoIterator<Item = AxisValue>) -> Self {
        self.data_section = Some(section.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Fields bound by this axis, empty when none is declared.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.field.as_ref().map(FieldBinding::fields).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoordOptions {
    pub x_axis: AxisOptions,
    #[serde(deserialize_with = "one_or_many")]
    pub y_axis: Vec<AxisOptions>,
    pub z_axis: AxisOptions,
}

/// One graph declaration and its field binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphOptions {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_name: Option<String>,
}

impl GraphOptions {
    #[must_use]
    pub fn new(kind: impl Into<String>, field: impl Into<FieldBinding>) -> Self {
        Self {
            kind: kind.into(),
            field: Some(field.into()),
            y_axis_name: None,
        }
    }

    #[must_use]
    pub fn without_field(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            field: None,
            y_axis_name: None,
        }
    }

    #[must_use]
    pub fn with_y_axis_name(mut self, name: impl Into<String>) -> Self {
        self.y_axis_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.field.as_ref().map(FieldBinding::fields).unwrap_or_default()
    }

    /// Whether the graph binds at least one non-empty field name.
    #[must_use]
    pub fn has_field(&self) -> bool {
        self.field.as_ref().is_some_and(|field| !field.is_empty())
    }

    #[must_use]
    pub fn forces_peak_layout(&self) -> bool {
        PEAK_FORCING_GRAPH_KINDS.contains(&self.kind.as_str())
    }
}

/// Chart options relevant to axis layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub coord: CoordOptions,
    pub graphs: Vec<GraphOptions>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisOptions) -> Self {
        self.coord.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOptions) -> Self {
        self.coord.y_axis.push(axis);
        self
    }

    #[must_use]
    pub fn with_z_axis(mut self, axis: AxisOptions) -> Self {
        self.coord.z_axis = axis;
        self
    }

    #[must_use]
    pub fn with_graph(mut self, graph: GraphOptions) -> Self {
        self.graphs.push(graph);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart options: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart options: {e}"))
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}
