//! The named collection of (sub-table, statistics) pairs an orchestrator
//! returns. Windows are keyed by stable strings so a renderer can look them
//! up without depending on tuple positions.

use crate::analysis::stats::StatsRecord;
use crate::table::RecordTable;
use std::collections::HashMap;

// Stable window names. Renderers key off these; do not rename.
pub const WINDOW_FULL: &str = "full";
pub const WINDOW_5H: &str = "5h";
pub const WINDOW_1D: &str = "1d";
pub const WINDOW_ARCHIVE: &str = "archive";
pub const WINDOW_FORECAST: &str = "forecast";
pub const WINDOW_CUSTOM: &str = "custom";

/// One selected window together with its statistics.
#[derive(Debug, Clone)]
pub struct WindowReport {
    pub table: RecordTable,
    pub stats: StatsRecord,
}

/// Mapping from window name to [`WindowReport`], created fresh per
/// orchestration call and owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct AggregationBundle {
    reports: HashMap<String, WindowReport>,
}

impl AggregationBundle {
    pub(crate) fn insert(&mut self, name: &str, table: RecordTable, stats: StatsRecord) {
        self.reports
            .insert(name.to_string(), WindowReport { table, stats });
    }

    pub fn get(&self, name: &str) -> Option<&WindowReport> {
        self.reports.get(name)
    }

    /// Window names present in this bundle, sorted for determinism.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.reports.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WindowReport)> {
        self.reports
            .iter()
            .map(|(name, report)| (name.as_str(), report))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
