//! The daily orchestrator: a custom day-limited window over the archive
//! table, with statistics for the window and the whole table.

use crate::analysis::bundle::{AggregationBundle, WINDOW_CUSTOM, WINDOW_FULL};
use crate::analysis::stats::summarize;
use crate::analysis::window::trailing_days;
use crate::error::MeteoviewError;
use crate::table::daily::DailyTable;
use bon::builder;
use log::debug;

/// Default day limit when the builder method is not called.
pub const DEFAULT_DAY_LIMIT: i64 = 30;

/// Aggregates a daily table into the full table plus one custom window.
///
/// This method uses a builder pattern.
///
/// # Arguments
///
/// * `.table(&DailyTable)`: **Required.** The parsed daily archive table.
/// * `.day_limit(i64)`: Optional. Length of the custom trailing window in
///   days, within `1..=90`. Defaults to [`DEFAULT_DAY_LIMIT`].
///
/// # Returns
///
/// An [`AggregationBundle`] keyed by [`WINDOW_FULL`] and [`WINDOW_CUSTOM`].
/// The custom window trails from the table's last timestamp.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::OutOfRange`] for a day limit outside
/// `1..=90` and [`crate::AnalysisError::EmptyTable`] when the table has no
/// rows to anchor the window on.
#[builder]
pub fn analyze_daily(
    table: &DailyTable,
    day_limit: Option<i64>,
) -> Result<AggregationBundle, MeteoviewError> {
    // Default applied here if the builder method was not called.
    let day_limit = day_limit.unwrap_or(DEFAULT_DAY_LIMIT);
    let full = table.table();
    let custom = trailing_days(full, day_limit)?;

    debug!(
        "daily windows: full={} custom({day_limit}d)={}",
        full.len(),
        custom.len()
    );

    let mut bundle = AggregationBundle::default();
    bundle.insert(WINDOW_FULL, full.clone(), summarize(full)?);
    bundle.insert(WINDOW_CUSTOM, custom.clone(), summarize(&custom)?);
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::error::AnalysisError;
    use crate::table::daily::FIELD_PRECIPITATION_SUM;
    use crate::types::payload::{DailyPayload, DailySeries};
    use chrono::{Duration, NaiveDate};
    use std::collections::HashMap;

    /// 90 consecutive days ending 2024-03-30 with zero precipitation except
    /// 10.0 on day 45 (index 44).
    fn payload() -> DailyPayload {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let time = (0..90)
            .map(|d| (start + Duration::days(d)).format("%Y-%m-%d").to_string())
            .collect();
        let mut precipitation = vec![Some(0.0); 90];
        precipitation[44] = Some(10.0);
        let filled = |v: f64| vec![Some(v); 90];
        DailyPayload {
            latitude: 26.9,
            longitude: 75.8,
            daily_units: HashMap::new(),
            daily: DailySeries {
                time,
                temperature_2m_min: filled(8.0),
                temperature_2m_max: filled(21.0),
                apparent_temperature_mean: filled(14.0),
                precipitation_sum: precipitation,
                sunshine_duration: filled(34000.0),
                wind_speed_10m_max: filled(9.0),
                wind_direction_10m_dominant: filled(300.0),
            },
        }
    }

    #[test]
    fn default_day_limit_is_thirty() {
        let table = DailyTable::from_payload(&payload()).unwrap();
        let bundle = analyze_daily().table(&table).call().unwrap();

        assert_eq!(bundle.names(), vec![WINDOW_CUSTOM, WINDOW_FULL]);
        assert_eq!(bundle.get(WINDOW_FULL).unwrap().table.len(), 90);
        assert_eq!(bundle.get(WINDOW_CUSTOM).unwrap().table.len(), 30);
    }

    #[test]
    fn full_table_precipitation_stats() {
        let table = DailyTable::from_payload(&payload()).unwrap();
        let bundle = analyze_daily().table(&table).call().unwrap();

        let precip = bundle
            .get(WINDOW_FULL)
            .unwrap()
            .stats
            .get(FIELD_PRECIPITATION_SUM)
            .unwrap();
        assert_eq!(precip.min, Some(0.0));
        assert_eq!(precip.max, Some(10.0));
        let avg = precip.avg.unwrap();
        assert!((avg - 10.0 / 90.0).abs() < 1e-12, "avg={avg}");
    }

    #[test]
    fn custom_window_excludes_early_days() {
        // The rain on day 45 falls outside the trailing 30 days.
        let table = DailyTable::from_payload(&payload()).unwrap();
        let bundle = analyze_daily().table(&table).call().unwrap();

        let precip = bundle
            .get(WINDOW_CUSTOM)
            .unwrap()
            .stats
            .get(FIELD_PRECIPITATION_SUM)
            .unwrap();
        assert_eq!(precip.max, Some(0.0));
    }

    #[test]
    fn whole_range_day_limit_is_accepted() {
        let table = DailyTable::from_payload(&payload()).unwrap();
        let bundle = analyze_daily().table(&table).day_limit(90).call().unwrap();
        assert_eq!(bundle.get(WINDOW_CUSTOM).unwrap().table.len(), 90);
    }

    #[test]
    fn out_of_range_day_limit_is_rejected() {
        let table = DailyTable::from_payload(&payload()).unwrap();
        for days in [0, 91, -3] {
            let err = analyze_daily()
                .table(&table)
                .day_limit(days)
                .call()
                .unwrap_err();
            assert!(
                matches!(err, MeteoviewError::Analysis(AnalysisError::OutOfRange { .. })),
                "days={days}"
            );
        }
    }
}
