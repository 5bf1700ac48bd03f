use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::time_scale::year_to_unix_seconds;
use crate::core::visibility::VisibilitySet;
use crate::error::{ChartError, ChartResult};

/// One tabular record: a calendar year plus one optional sample per
/// column, in header order. Missing samples are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

impl SeriesRow {
    #[must_use]
    pub fn new(year: i32, values: Vec<Option<f64>>) -> Self {
        Self { year, values }
    }
}

/// One sample of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Unix seconds of Jan 1 UTC of the sample's year.
    pub time: f64,
    pub value: Option<f64>,
}

/// The full time-ordered value sequence for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// True when at least one sample carries a value.
    ///
    /// A series that never does stays listed in the legend but cannot
    /// contribute to the value domain or render a line.
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.points.iter().any(|point| point.value.is_some())
    }
}

/// Validated, canonicalized source table: category columns in header
/// order plus one derived [`Series`] per column.
///
/// Construction is the only ingestion path; a table that exists is
/// well-formed (unique non-empty header, uniform row arity, finite
/// sample values, strictly increasing times after canonicalization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    columns: Vec<String>,
    times: Vec<f64>,
    series: Vec<Series>,
}

impl SeriesTable {
    /// Builds a table from header columns and raw rows.
    ///
    /// Rows are canonicalized before derivation: sorted by year with
    /// last-wins de-duplication, matching realtime-update semantics for
    /// replayed years. Malformed input fails as a whole; there is no
    /// partial table.
    pub fn from_rows(columns: Vec<String>, rows: Vec<SeriesRow>) -> ChartResult<Self> {
        if columns.is_empty() {
            return Err(ChartError::DataSource(
                "header must name at least one series column".to_owned(),
            ));
        }
        for (index, column) in columns.iter().enumerate() {
            if column.is_empty() {
                return Err(ChartError::DataSource(format!(
                    "header column {index} has an empty name"
                )));
            }
            if columns[..index].contains(column) {
                return Err(ChartError::DataSource(format!(
                    "duplicate series column `{column}`"
                )));
            }
        }
        if rows.is_empty() {
            return Err(ChartError::DataSource(
                "at least one data row is required".to_owned(),
            ));
        }

        for row in &rows {
            if row.values.len() != columns.len() {
                return Err(ChartError::DataSource(format!(
                    "row for year {} has {} values, expected {}",
                    row.year,
                    row.values.len(),
                    columns.len()
                )));
            }
            for (column, value) in columns.iter().zip(&row.values) {
                if let Some(value) = value {
                    if !value.is_finite() {
                        return Err(ChartError::DataSource(format!(
                            "non-finite value for `{column}` in year {}",
                            row.year
                        )));
                    }
                }
            }
        }

        let original_count = rows.len();
        let rows = canonicalize_rows(rows);
        if rows.len() != original_count {
            debug!(
                original_count,
                canonical_count = rows.len(),
                "dropped duplicate-year rows during ingestion"
            );
        }

        let mut times = Vec::with_capacity(rows.len());
        for row in &rows {
            times.push(year_to_unix_seconds(row.year)?);
        }

        let series = columns
            .iter()
            .enumerate()
            .map(|(column_index, id)| Series {
                id: id.clone(),
                points: rows
                    .iter()
                    .zip(&times)
                    .map(|(row, time)| SeriesPoint {
                        time: *time,
                        value: row.values[column_index],
                    })
                    .collect(),
            })
            .collect();

        debug!(
            columns = columns.len(),
            rows = rows.len(),
            "series table ingested"
        );

        Ok(Self {
            columns,
            times,
            series,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.id == id)
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.times.len()
    }

    /// Full date range across all rows, independent of any filtering.
    #[must_use]
    pub fn time_extent(&self) -> (f64, f64) {
        // Canonicalized times are sorted and non-empty.
        (self.times[0], self.times[self.times.len() - 1])
    }

    /// `[min, max]` across samples of visible series only.
    ///
    /// Returns `None` when no visible series contributes a value, which
    /// callers must treat as a degenerate (axes-and-legend-only) render.
    #[must_use]
    pub fn value_extent(&self, visibility: &VisibilitySet) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;

        for series in &self.series {
            if !visibility.is_visible(&series.id) {
                continue;
            }
            for point in &series.points {
                if let Some(value) = point.value {
                    min = min.min(value);
                    max = max.max(value);
                    seen = true;
                }
            }
        }

        seen.then_some((min, max))
    }

    /// Default toggle state: every column visible.
    #[must_use]
    pub fn default_visibility(&self) -> VisibilitySet {
        VisibilitySet::all_visible(self.columns.iter().cloned())
    }
}

fn canonicalize_rows(mut rows: Vec<SeriesRow>) -> Vec<SeriesRow> {
    rows.sort_by_key(|row| row.year);

    let mut canonical: Vec<SeriesRow> = Vec::with_capacity(rows.len());
    for row in rows {
        match canonical.last_mut() {
            // Stable sort keeps input order within a year, so the last
            // occurrence wins.
            Some(last) if last.year == row.year => *last = row,
            _ => canonical.push(row),
        }
    }
    canonical
}
