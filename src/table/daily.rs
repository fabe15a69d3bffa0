//! The daily table shape: one archived observation per past calendar day.

use crate::table::error::TableError;
use crate::table::{parse_utc, RecordTable};
use crate::types::payload::DailyPayload;

pub const FIELD_TEMP_MIN: &str = "temperature_2m_min";
pub const FIELD_TEMP_MAX: &str = "temperature_2m_max";
pub const FIELD_APPARENT_TEMP_MEAN: &str = "apparent_temperature_mean";
pub const FIELD_PRECIPITATION_SUM: &str = "precipitation_sum";
pub const FIELD_SUNSHINE_DURATION: &str = "sunshine_duration";
pub const FIELD_WIND_SPEED_MAX: &str = "wind_speed_10m_max";
pub const FIELD_WIND_DIRECTION_DOMINANT: &str = "wind_direction_10m_dominant";

/// The daily schema, in column order.
pub const DAILY_FIELDS: [&str; 7] = [
    FIELD_TEMP_MIN,
    FIELD_TEMP_MAX,
    FIELD_APPARENT_TEMP_MEAN,
    FIELD_PRECIPITATION_SUM,
    FIELD_SUNSHINE_DURATION,
    FIELD_WIND_SPEED_MAX,
    FIELD_WIND_DIRECTION_DOMINANT,
];

/// A validated table of daily archive observations.
///
/// Daily dates resolve to midnight UTC on the time axis, so the same
/// selectors work across both table shapes.
#[derive(Debug, Clone)]
pub struct DailyTable {
    table: RecordTable,
}

impl DailyTable {
    /// Parses a raw daily payload into a table.
    ///
    /// Fails the same way [`crate::HourlyTable::from_payload`] does:
    /// malformed dates, an unsorted time axis and misaligned field arrays
    /// are each a distinct [`TableError`].
    pub fn from_payload(payload: &DailyPayload) -> Result<Self, TableError> {
        let series = &payload.daily;
        let timestamps = series
            .time
            .iter()
            .map(|raw| parse_utc(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let fields = vec![
            (FIELD_TEMP_MIN, series.temperature_2m_min.clone()),
            (FIELD_TEMP_MAX, series.temperature_2m_max.clone()),
            (
                FIELD_APPARENT_TEMP_MEAN,
                series.apparent_temperature_mean.clone(),
            ),
            (FIELD_PRECIPITATION_SUM, series.precipitation_sum.clone()),
            (FIELD_SUNSHINE_DURATION, series.sunshine_duration.clone()),
            (FIELD_WIND_SPEED_MAX, series.wind_speed_10m_max.clone()),
            (
                FIELD_WIND_DIRECTION_DOMINANT,
                series.wind_direction_10m_dominant.clone(),
            ),
        ];
        Ok(Self {
            table: RecordTable::from_parts(timestamps, fields)?,
        })
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn into_table(self) -> RecordTable {
        self.table
    }
}
