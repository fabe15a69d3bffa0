//! The hourly orchestrator: calendar split plus trailing windows over the
//! archived half, with statistics for every window.

use crate::analysis::bundle::{
    AggregationBundle, WINDOW_1D, WINDOW_5H, WINDOW_ARCHIVE, WINDOW_FORECAST, WINDOW_FULL,
};
use crate::analysis::error::AnalysisError;
use crate::analysis::stats::summarize;
use crate::analysis::window::{split_by_date, trailing};
use crate::error::MeteoviewError;
use crate::table::hourly::HourlyTable;
use bon::builder;
use chrono::{Duration, NaiveDate};
use log::{debug, warn};

/// Aggregates an hourly table into the standard window set.
///
/// This method uses a builder pattern.
///
/// # Arguments
///
/// * `.table(&HourlyTable)`: **Required.** The parsed hourly table, spanning
///   past and forecast rows.
/// * `.today(NaiveDate)`: **Required.** The caller's notion of the current
///   date. Injected rather than read from the system clock so results are
///   reproducible.
///
/// # Returns
///
/// An [`AggregationBundle`] keyed by
/// [`WINDOW_FULL`], [`WINDOW_5H`], [`WINDOW_1D`], [`WINDOW_ARCHIVE`] and
/// [`WINDOW_FORECAST`]. The `5h` and `1d` windows trail from the archive's
/// last timestamp; `full` carries the unfiltered table and its statistics.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyTable`] when the archive half has no rows,
/// i.e. every timestamp is future-dated. That signals a data-source problem
/// upstream and is never papered over with zero-filled statistics. An empty
/// *forecast* half is fine; its statistics are no-data markers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use meteoview::{analyze_hourly, HourlyPayload, HourlyTable, WINDOW_5H};
///
/// # fn payload() -> HourlyPayload {
/// #     let time: Vec<String> = (0..24)
/// #         .map(|h| format!("2024-01-01T{h:02}:00"))
/// #         .collect();
/// #     let values: Vec<Option<f64>> = (0..24).map(|h| Some(h as f64)).collect();
/// #     HourlyPayload {
/// #         latitude: 52.52,
/// #         longitude: 13.41,
/// #         hourly_units: Default::default(),
/// #         hourly: meteoview::HourlySeries {
/// #             time,
/// #             temperature_2m: values.clone(),
/// #             relative_humidity_2m: values.clone(),
/// #             precipitation: values.clone(),
/// #             cloud_cover: values.clone(),
/// #             surface_pressure: values.clone(),
/// #             wind_speed_10m: values.clone(),
/// #             wind_direction_10m: values,
/// #         },
/// #     }
/// # }
/// let table = HourlyTable::from_payload(&payload())?;
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let bundle = analyze_hourly().table(&table).today(today).call()?;
///
/// let five_hours = bundle.get(WINDOW_5H).unwrap();
/// assert_eq!(five_hours.table.len(), 5);
/// assert_eq!(five_hours.stats.get("temperature_2m").unwrap().avg, Some(21.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[builder]
pub fn analyze_hourly(
    table: &HourlyTable,
    today: NaiveDate,
) -> Result<AggregationBundle, MeteoviewError> {
    let full = table.table();
    let split = split_by_date(full, today)?;

    if split.archive.is_empty() {
        return Err(AnalysisError::EmptyTable {
            window: WINDOW_ARCHIVE.to_string(),
        }
        .into());
    }
    if split.forecast.is_empty() {
        warn!("no rows dated after {today}; forecast statistics will be empty");
    }

    // Both trailing windows anchor at the archive's last timestamp.
    let five_hours = trailing(&split.archive, Duration::hours(5), None)?;
    let one_day = trailing(&split.archive, Duration::hours(24), None)?;

    debug!(
        "hourly windows for {today}: full={} archive={} forecast={} 5h={} 1d={}",
        full.len(),
        split.archive.len(),
        split.forecast.len(),
        five_hours.len(),
        one_day.len()
    );

    let mut bundle = AggregationBundle::default();
    bundle.insert(WINDOW_FULL, full.clone(), summarize(full)?);
    bundle.insert(WINDOW_5H, five_hours.clone(), summarize(&five_hours)?);
    bundle.insert(WINDOW_1D, one_day.clone(), summarize(&one_day)?);
    bundle.insert(
        WINDOW_ARCHIVE,
        split.archive.clone(),
        summarize(&split.archive)?,
    );
    bundle.insert(
        WINDOW_FORECAST,
        split.forecast.clone(),
        summarize(&split.forecast)?,
    );
    Ok(bundle)
}
