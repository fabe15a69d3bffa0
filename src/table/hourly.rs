//! The hourly table shape: past-plus-future observations at hourly cadence.

use crate::table::error::TableError;
use crate::table::{parse_utc, RecordTable};
use crate::types::payload::HourlyPayload;

pub const FIELD_TEMPERATURE: &str = "temperature_2m";
pub const FIELD_HUMIDITY: &str = "relative_humidity_2m";
pub const FIELD_PRECIPITATION: &str = "precipitation";
pub const FIELD_CLOUD_COVER: &str = "cloud_cover";
pub const FIELD_PRESSURE: &str = "surface_pressure";
pub const FIELD_WIND_SPEED: &str = "wind_speed_10m";
pub const FIELD_WIND_DIRECTION: &str = "wind_direction_10m";

/// The hourly schema, in column order.
pub const HOURLY_FIELDS: [&str; 7] = [
    FIELD_TEMPERATURE,
    FIELD_HUMIDITY,
    FIELD_PRECIPITATION,
    FIELD_CLOUD_COVER,
    FIELD_PRESSURE,
    FIELD_WIND_SPEED,
    FIELD_WIND_DIRECTION,
];

/// A validated table of hourly observations.
///
/// Hourly data spans both the recent past and the forecast horizon; the
/// hourly orchestrator splits it on a calendar date. Field names are kept
/// exactly as the provider reports them so downstream label lookups keep
/// working.
#[derive(Debug, Clone)]
pub struct HourlyTable {
    table: RecordTable,
}

impl HourlyTable {
    /// Parses a raw hourly payload into a table.
    ///
    /// Fails with [`TableError::MalformedTimestamp`] on an unparsable time
    /// value, [`TableError::UnsortedInput`] if the time axis is not
    /// ascending, and [`TableError::InconsistentSchema`] if any field array
    /// is not aligned with the time array.
    pub fn from_payload(payload: &HourlyPayload) -> Result<Self, TableError> {
        let series = &payload.hourly;
        let timestamps = series
            .time
            .iter()
            .map(|raw| parse_utc(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let fields = vec![
            (FIELD_TEMPERATURE, series.temperature_2m.clone()),
            (FIELD_HUMIDITY, series.relative_humidity_2m.clone()),
            (FIELD_PRECIPITATION, series.precipitation.clone()),
            (FIELD_CLOUD_COVER, series.cloud_cover.clone()),
            (FIELD_PRESSURE, series.surface_pressure.clone()),
            (FIELD_WIND_SPEED, series.wind_speed_10m.clone()),
            (FIELD_WIND_DIRECTION, series.wind_direction_10m.clone()),
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
