//! Window selection: trailing-duration windows and the archive/forecast
//! calendar partition.
//!
//! Selection is a pure Polars filter on the naive-UTC `time` column, so a
//! selected window is itself a [`RecordTable`] with the same schema and row
//! order; selecting again with the same bounds returns the same rows.

use crate::analysis::error::AnalysisError;
use crate::table::{RecordTable, COL_TIME};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use polars::prelude::{col, lit, IntoLazy};

/// Inclusive bounds for the custom daily window.
pub const MIN_CUSTOM_DAYS: i64 = 1;
pub const MAX_CUSTOM_DAYS: i64 = 90;

/// The two halves of a calendar-date partition.
///
/// `archive` holds every row whose date is on or before the reference date,
/// `forecast` every row strictly after it. Together they reconstruct the
/// partitioned table exactly: no overlap, no gaps.
#[derive(Debug, Clone)]
pub struct DatePartition {
    pub archive: RecordTable,
    pub forecast: RecordTable,
}

/// Selects the trailing window of `duration` measured back from `anchor`.
///
/// The window holds every row strictly after `anchor - duration` and at or
/// before `anchor`, so a five-hour window over hourly records holds exactly
/// five rows. A lower bound that precedes the first row is just a filter:
/// the whole table is returned, no error.
///
/// When `anchor` is `None` it defaults to the table's last timestamp, which
/// requires a non-empty table ([`AnalysisError::EmptyTable`] otherwise).
/// `duration` must be positive.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use meteoview::{trailing, RecordTable};
///
/// let timestamps: Vec<_> = (0..24)
///     .map(|h| Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap())
///     .collect();
/// let temps = (0..24).map(|h| Some(h as f64)).collect();
/// let table = RecordTable::from_parts(timestamps, vec![("temperature_2m", temps)])?;
///
/// let last_5h = trailing(&table, Duration::hours(5), None)?;
/// assert_eq!(last_5h.len(), 5);
/// assert_eq!(last_5h.field("temperature_2m")?[0], Some(19.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn trailing(
    table: &RecordTable,
    duration: Duration,
    anchor: Option<DateTime<Utc>>,
) -> Result<RecordTable, AnalysisError> {
    if duration <= Duration::zero() {
        return Err(AnalysisError::NonPositiveDuration(duration));
    }
    let anchor = match anchor {
        Some(instant) => instant,
        None => table
            .last_timestamp()?
            .ok_or_else(|| AnalysisError::EmptyTable {
                window: format!("trailing {}h", duration.num_hours()),
            })?,
    };
    let lower = (anchor - duration).naive_utc();
    let upper = anchor.naive_utc();

    let filtered = table
        .frame()
        .clone()
        .lazy()
        .filter(col(COL_TIME).gt(lit(lower)).and(col(COL_TIME).lt_eq(lit(upper))))
        .collect()?;
    Ok(RecordTable::from_frame(filtered))
}

/// Selects the trailing `days`-day window, anchored at the last timestamp.
///
/// `days` must lie in [`MIN_CUSTOM_DAYS`]`..=`[`MAX_CUSTOM_DAYS`];
/// anything else is [`AnalysisError::OutOfRange`].
pub fn trailing_days(table: &RecordTable, days: i64) -> Result<RecordTable, AnalysisError> {
    if !(MIN_CUSTOM_DAYS..=MAX_CUSTOM_DAYS).contains(&days) {
        return Err(AnalysisError::OutOfRange { days });
    }
    trailing(table, Duration::days(days), None)
}

/// Partitions a table into archive and forecast halves around `today`.
///
/// The comparison is date-only: a row stamped anywhere during `today`
/// belongs to the archive. `today` is injected by the caller rather than
/// read from the wall clock, so partitions are reproducible.
pub fn split_by_date(
    table: &RecordTable,
    today: NaiveDate,
) -> Result<DatePartition, AnalysisError> {
    // First instant strictly after `today`; date(t) <= today  <=>  t < boundary.
    let boundary = today
        .succ_opt()
        .and_then(|next| next.and_hms_opt(0, 0, 0))
        .ok_or(AnalysisError::DateOverflow { date: today })?;

    let archive = table
        .frame()
        .clone()
        .lazy()
        .filter(col(COL_TIME).lt(lit(boundary)))
        .collect()?;
    let forecast = table
        .frame()
        .clone()
        .lazy()
        .filter(col(COL_TIME).gt_eq(lit(boundary)))
        .collect()?;

    Ok(DatePartition {
        archive: RecordTable::from_frame(archive),
        forecast: RecordTable::from_frame(forecast),
    })
}
