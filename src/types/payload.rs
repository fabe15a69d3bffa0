//! Raw Open-Meteo payloads: parallel per-field arrays aligned by index to a
//! `time` array, plus the unit label the provider reports per field.
//!
//! These structs are the ingestion boundary. A caller fetches JSON from the
//! forecast or archive endpoint (or reads a recorded response), deserializes
//! it into a payload, and hands the payload to [`crate::HourlyTable`] /
//! [`crate::DailyTable`]. The unit maps are carried through untouched so a
//! downstream renderer can pick metric or imperial suffixes.

use serde::Deserialize;
use std::collections::HashMap;

/// One hourly forecast response: location, unit labels and the series itself.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyPayload {
    pub latitude: f64,
    pub longitude: f64,
    /// Field name to unit label, e.g. `"temperature_2m" -> "°C"`.
    #[serde(default)]
    pub hourly_units: HashMap<String, String>,
    pub hourly: HourlySeries,
}

/// The hourly series: one timestamp array and seven parallel value arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub cloud_cover: Vec<Option<f64>>,
    pub surface_pressure: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
}

impl HourlyPayload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn units(&self) -> &HashMap<String, String> {
        &self.hourly_units
    }
}

/// One daily archive response.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyPayload {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub daily_units: HashMap<String, String>,
    pub daily: DailySeries,
}

/// The daily series: one date array and seven parallel value arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub apparent_temperature_mean: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub sunshine_duration: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<Option<f64>>,
    pub wind_direction_10m_dominant: Vec<Option<f64>>,
}

impl DailyPayload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn units(&self) -> &HashMap<String, String> {
        &self.daily_units
    }
}
