//! Per-field summary statistics over a selected window.

use crate::analysis::error::AnalysisError;
use crate::table::RecordTable;
use polars::prelude::*;
use serde::Serialize;

/// Min, max and arithmetic mean of one field over one window.
///
/// `None` is the explicit no-data marker: the window was empty or the field
/// held no non-missing value there. It is never collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl FieldStats {
    /// True when the field had no data in the window.
    pub fn is_missing(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.avg.is_none()
    }
}

/// Statistics for every field of a window, in the table's field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRecord {
    entries: Vec<(String, FieldStats)>,
}

impl StatsRecord {
    pub fn get(&self, field: &str) -> Option<&FieldStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldStats)> {
        self.entries
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes min/max/mean for every numeric field of `table`.
///
/// Missing values are skipped; the mean is sum over count of the present
/// values in `f64`, with no rounding (display rounding belongs to the
/// renderer). On an empty table every field comes back as the no-data
/// marker.
pub fn summarize(table: &RecordTable) -> Result<StatsRecord, AnalysisError> {
    let mut entries = Vec::new();
    for name in table.field_names() {
        let ca = table.frame().column(&name)?.f64()?;
        let stats = FieldStats {
            min: ca.min(),
            max: ca.max(),
            avg: ca.mean(),
        };
        entries.push((name, stats));
    }
    Ok(StatsRecord { entries })
}
