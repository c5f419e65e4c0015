use crate::core::domain::PointSet;
use crate::error::{AnalysisError, AnalysisResult};

/// A single named column, either already numeric or raw text to be coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column-oriented table handed over by the ingestion layer.
///
/// All columns have the same number of rows. Column lookup is by exact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    columns: Vec<(String, Column)>,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a column.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LengthMismatch`] if the column's row count
    /// differs from the columns already present.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> AnalysisResult<Self> {
        let name = name.into();
        if let Some(expected) = self.other_rows(&name) {
            if expected != column.len() {
                return Err(AnalysisError::LengthMismatch {
                    column: name,
                    expected,
                    found: column.len(),
                });
            }
        }

        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name, column)),
        }
        Ok(self)
    }

    pub fn with_numeric(self, name: impl Into<String>, values: Vec<f64>) -> AnalysisResult<Self> {
        self.with_column(name, Column::Numeric(values))
    }

    pub fn with_text<S: Into<String>>(
        self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> AnalysisResult<Self> {
        let values = values.into_iter().map(Into::into).collect();
        self.with_column(name, Column::Text(values))
    }

    fn other_rows(&self, except: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(n, _)| n != except)
            .map(|(_, c)| c.len())
    }

    /// Number of rows (0 for a table without columns).
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Reads a column as `f64`, parsing text cells.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::MissingColumn`] if absent, [`AnalysisError::NonNumeric`]
    /// for the first text cell that does not parse.
    pub fn numeric_column(&self, name: &str) -> AnalysisResult<Vec<f64>> {
        match self.column(name) {
            None => Err(AnalysisError::MissingColumn(name.to_string())),
            Some(Column::Numeric(values)) => Ok(values.clone()),
            Some(Column::Text(cells)) => cells
                .iter()
                .enumerate()
                .map(|(row, raw)| {
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| AnalysisError::NonNumeric {
                            column: name.to_string(),
                            row,
                            raw: raw.clone(),
                        })
                })
                .collect(),
        }
    }

    /// Like [`numeric_column`](Self::numeric_column), but also rejects NaN and infinities.
    pub fn finite_column(&self, name: &str) -> AnalysisResult<Vec<f64>> {
        let values = self.numeric_column(name)?;
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::NonFinite {
                column: name.to_string(),
                row,
            });
        }
        Ok(values)
    }

    /// Extracts a validated [`PointSet`].
    ///
    /// Coordinates and values must be finite numbers. When `radius_column`
    /// names a column that exists, its values become the per-point radii;
    /// a named radius column that is absent is ignored.
    pub fn point_set(
        &self,
        latitude: &str,
        longitude: &str,
        value: &str,
        radius_column: Option<&str>,
    ) -> AnalysisResult<PointSet> {
        // report a missing column before any parse error
        for name in [latitude, longitude, value] {
            if !self.has_column(name) {
                return Err(AnalysisError::MissingColumn(name.to_string()));
            }
        }

        let points = PointSet::from_columns(
            &self.finite_column(latitude)?,
            &self.finite_column(longitude)?,
            &self.finite_column(value)?,
        )?;

        match radius_column.filter(|name| self.has_column(name)) {
            Some(name) => points.with_radii(&self.numeric_column(name)?),
            None => Ok(points),
        }
    }
}
