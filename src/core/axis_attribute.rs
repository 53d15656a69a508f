use indexmap::{IndexMap, IndexSet};

use crate::core::{AxisValue, DataSet, numeric_extent};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Mutable state of one axis: bound fields, raw values, section and colors.
///
/// The active section is the custom section when one is installed and the
/// auto-derived one otherwise. Section setters reject empty input and drop
/// duplicates (first occurrence wins), so a bound axis always exposes a
/// non-empty section of unique values. An attribute whose section was never
/// set is unbound and its `section()` is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisAttribute {
    fields: Vec<String>,
    raw_values: Vec<AxisValue>,
    org_section: Vec<AxisValue>,
    custom_section: Option<Vec<AxisValue>>,
    colors: IndexMap<String, Color>,
}

impl AxisAttribute {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `fields` and collects their values from `data`.
    pub fn set_field(&mut self, fields: &[String], data: &DataSet) {
        self.fields = fields.to_vec();
        self.rebind(data);
    }

    /// Refreshes raw values for the already bound fields.
    pub fn rebind(&mut self, data: &DataSet) {
        self.raw_values = data.collect_fields(&self.fields);
    }

    pub fn set_org_section(&mut self, section: Vec<AxisValue>) -> ChartResult<()> {
        self.org_section = unique_section(section)?;
        Ok(())
    }

    pub fn set_custom_section(&mut self, section: Vec<AxisValue>) -> ChartResult<()> {
        self.custom_section = Some(unique_section(section)?);
        Ok(())
    }

    pub fn clear_custom_section(&mut self) {
        self.custom_section = None;
    }

    /// Drops both sections, leaving the axis unbound.
    pub fn clear_sections(&mut self) {
        self.org_section.clear();
        self.custom_section = None;
    }

    /// Active section: the custom section if installed, else the derived one.
    #[must_use]
    pub fn section(&self) -> &[AxisValue] {
        self.custom_section.as_deref().unwrap_or(self.org_section.as_slice())
    }

    #[must_use]
    pub fn org_section(&self) -> &[AxisValue] {
        &self.org_section
    }

    #[must_use]
    pub fn custom_section(&self) -> Option<&[AxisValue]> {
        self.custom_section.as_deref()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.section().is_empty()
    }

    #[must_use]
    pub fn index_of(&self, value: &AxisValue) -> Option<usize> {
        self.section().iter().position(|candidate| candidate == value)
    }

    /// Smallest and largest numeric value of the active section.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        numeric_extent(self.section())
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn raw_values(&self) -> &[AxisValue] {
        &self.raw_values
    }

    /// Raw values as numbers, or `None` when any value is a text label.
    #[must_use]
    pub fn numeric_raw_values(&self) -> Option<Vec<f64>> {
        self.raw_values.iter().map(AxisValue::as_f64).collect()
    }

    pub fn set_colors(&mut self, colors: IndexMap<String, Color>) {
        self.colors = colors;
    }

    #[must_use]
    pub fn colors(&self) -> &IndexMap<String, Color> {
        &self.colors
    }

    #[must_use]
    pub fn color_of(&self, field: &str) -> Option<Color> {
        self.colors.get(field).copied()
    }
}

/// Removes duplicates while keeping first-seen order.
#[must_use]
pub fn unique_values(values: impl IntoIterator<Item = AxisValue>) -> Vec<AxisValue> {
    values
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

fn unique_section(section: Vec<AxisValue>) -> ChartResult<Vec<AxisValue>> {
    if section.is_empty() {
        return Err(ChartError::EmptySection);
    }
    Ok(unique_values(section))
}
