use indexmap::IndexMap;
use serde_json::Value;

use crate::core::AxisValue;
use crate::error::{ChartError, ChartResult};

/// Column store of chart data keyed by field name.
///
/// Columns keep the order in which their field first appeared so field
/// iteration is stable across rebuilds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    columns: IndexMap<String, Vec<AxisValue>>,
}

impl DataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = AxisValue>,
    ) -> Self {
        self.columns
            .entry(field.into())
            .or_default()
            .extend(values);
        self
    }

    /// Builds a data set from a header row followed by value rows:
    /// `[["year", "sales"], ["2016", 111], ["2017", 95]]`.
    pub fn from_matrix(rows: &[Vec<Value>]) -> ChartResult<Self> {
        let Some((header, body)) = rows.split_first() else {
            return Ok(Self::default());
        };

        let mut fields = Vec::with_capacity(header.len());
        for cell in header {
            let Value::String(name) = cell else {
                return Err(ChartError::InvalidData(
                    "data matrix header cells must be strings".to_owned(),
                ));
            };
            fields.push(name.clone());
        }

        let mut columns: IndexMap<String, Vec<AxisValue>> = fields
            .iter()
            .map(|field| (field.clone(), Vec::with_capacity(body.len())))
            .collect();
        for (row_index, row) in body.iter().enumerate() {
            if row.len() > fields.len() {
                return Err(ChartError::InvalidData(format!(
                    "data row {row_index} has {} cells but the header declares {}",
                    row.len(),
                    fields.len()
                )));
            }
            for (field, cell) in fields.iter().zip(row) {
                if let Some(value) = AxisValue::from_json(cell) {
                    if let Some(column) = columns.get_mut(field) {
                        column.push(value);
                    }
                }
            }
        }

        Ok(Self { columns })
    }

    /// Builds a data set from a list of records:
    /// `[{"year": "2016", "sales": 111}, {"year": "2017", "sales": 95}]`.
    pub fn from_records(records: &[Value]) -> ChartResult<Self> {
        let mut columns: IndexMap<String, Vec<AxisValue>> = IndexMap::new();
        for (row_index, record) in records.iter().enumerate() {
            let Value::Object(cells) = record else {
                return Err(ChartError::InvalidData(format!(
                    "data record {row_index} must be an object"
                )));
            };
            for (field, cell) in cells {
                let column = columns.entry(field.clone()).or_default();
                if let Some(value) = AxisValue::from_json(cell) {
                    column.push(value);
                }
            }
        }
        Ok(Self { columns })
    }

    /// Parses either accepted JSON shape (header matrix or record list).
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let parsed: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse data json: {e}")))?;
        let Value::Array(rows) = parsed else {
            return Err(ChartError::InvalidData(
                "data json must be an array".to_owned(),
            ));
        };

        match rows.first() {
            None => Ok(Self::default()),
            Some(Value::Array(_)) => {
                let mut matrix = Vec::with_capacity(rows.len());
                for row in rows {
                    let Value::Array(cells) = row else {
                        return Err(ChartError::InvalidData(
                            "data matrix rows must all be arrays".to_owned(),
                        ));
                    };
                    matrix.push(cells);
                }
                Self::from_matrix(&matrix)
            }
            Some(_) => Self::from_records(&rows),
        }
    }

    #[must_use]
    pub fn column(&self, field: &str) -> Option<&[AxisValue]> {
        self.columns.get(field).map(Vec::as_slice)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    /// Collects the values of every listed field, in field order.
    /// Unknown fields contribute nothing.
    #[must_use]
    pub fn collect_fields(&self, fields: &[String]) -> Vec<AxisValue> {
        fields
            .iter()
            .filter_map(|field| self.column(field))
            .flat_map(|column| column.iter().cloned())
            .collect()
    }
}
