//! Time-indexed record tables backing all window selection and aggregation.

pub mod daily;
pub mod error;
pub mod hourly;

use crate::table::error::TableError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use polars::prelude::*;

/// Name of the timestamp column shared by every table shape.
pub const COL_TIME: &str = "time";

/// Parses one raw timestamp into a UTC instant.
///
/// Accepts RFC 3339 as well as the timezone-less shapes Open-Meteo emits:
/// `2024-01-01T13:00:00`, `2024-01-01T13:00` (hourly) and `2024-01-01`
/// (daily, resolved to midnight). Timezone-less values are read as UTC,
/// which is the reference timezone for every table.
pub(crate) fn parse_utc(value: &str) -> Result<DateTime<Utc>, TableError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(TableError::MalformedTimestamp {
        value: value.to_string(),
    })
}

/// A single row of a [`RecordTable`]: the timestamp plus every numeric
/// field in the table's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub values: Vec<(String, Option<f64>)>,
}

impl Observation {
    /// Looks up one field of this row by name.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| *value)
    }
}

/// An ordered, time-indexed collection of weather observations with named
/// numeric fields.
///
/// Internally this wraps a Polars `DataFrame` whose first column is
/// [`COL_TIME`] and whose remaining columns are `f64` fields. The frame
/// stores timestamps as timezone-naive UTC (`Datetime[ms]`); the public
/// API converts to and from `DateTime<Utc>` at the boundary.
///
/// Construction validates the invariants every selector relies on:
/// ascending timestamps and field arrays aligned with the time axis.
/// Sub-tables produced by window selection are `RecordTable`s again, so
/// selections compose.
#[derive(Debug, Clone)]
pub struct RecordTable {
    df: DataFrame,
}

impl RecordTable {
    /// Builds a table from a timestamp axis and named field columns.
    ///
    /// Every field vector must be exactly as long as `timestamps`
    /// ([`TableError::InconsistentSchema`] otherwise), and timestamps must
    /// be non-decreasing ([`TableError::UnsortedInput`]).
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use meteoview::RecordTable;
    ///
    /// let timestamps: Vec<_> = (0..3)
    ///     .map(|h| Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap())
    ///     .collect();
    /// let table = RecordTable::from_parts(
    ///     timestamps,
    ///     vec![("temperature_2m", vec![Some(1.0), Some(2.0), Some(3.0)])],
    /// )?;
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.field_names(), vec!["temperature_2m"]);
    /// # Ok::<(), meteoview::TableError>(())
    /// ```
    pub fn from_parts(
        timestamps: Vec<DateTime<Utc>>,
        fields: Vec<(&str, Vec<Option<f64>>)>,
    ) -> Result<Self, TableError> {
        if let Some(pos) = timestamps.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(TableError::UnsortedInput {
                index: pos + 1,
                previous: timestamps[pos],
                current: timestamps[pos + 1],
            });
        }

        let naive: Vec<NaiveDateTime> = timestamps.iter().map(|t| t.naive_utc()).collect();
        let mut columns = Vec::with_capacity(fields.len() + 1);
        columns.push(Column::new(COL_TIME.into(), naive));
        for (name, values) in fields {
            if values.len() != timestamps.len() {
                return Err(TableError::InconsistentSchema {
                    field: name.to_string(),
                    expected: timestamps.len(),
                    found: values.len(),
                });
            }
            columns.push(Column::new(name.into(), values));
        }

        Ok(Self {
            df: DataFrame::new(columns)?,
        })
    }

    /// Wraps a frame that already satisfies the table invariants
    /// (used for sub-tables produced by filtering an existing table).
    pub(crate) fn from_frame(df: DataFrame) -> Self {
        Self { df }
    }

    /// Read-only view of the underlying Polars frame.
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Names of the numeric fields, in column order, excluding the time axis.
    pub fn field_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .filter(|name| name.as_str() != COL_TIME)
            .map(|name| name.to_string())
            .collect()
    }

    /// The ordered sequence of values for one field.
    pub fn field(&self, name: &str) -> Result<Vec<Option<f64>>, TableError> {
        let column = self
            .df
            .column(name)
            .map_err(|e| TableError::ColumnNotFound(name.to_string(), e))?;
        Ok(column.f64()?.into_iter().collect())
    }

    /// The full timestamp axis as UTC instants.
    pub fn timestamps(&self) -> Result<Vec<DateTime<Utc>>, TableError> {
        let column = self.time_column()?;
        column
            .into_iter()
            .map(|opt_ms| {
                opt_ms
                    .and_then(DateTime::from_timestamp_millis)
                    .ok_or_else(|| TableError::MalformedTimestamp {
                        value: "<null>".to_string(),
                    })
            })
            .collect()
    }

    /// The timestamp of the row at `index`.
    pub fn timestamp_at(&self, index: usize) -> Result<DateTime<Utc>, TableError> {
        if index >= self.len() {
            return Err(TableError::RowOutOfBounds {
                index,
                height: self.len(),
            });
        }
        self.time_column()?
            .get(index)
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| TableError::MalformedTimestamp {
                value: format!("<row {index}>"),
            })
    }

    /// The last (most recent) timestamp, or `None` for an empty table.
    ///
    /// This is the default anchor for trailing-duration windows.
    pub fn last_timestamp(&self) -> Result<Option<DateTime<Utc>>, TableError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.timestamp_at(self.len() - 1).map(Some)
    }

    /// The full observation at `index`.
    pub fn row(&self, index: usize) -> Result<Observation, TableError> {
        let timestamp = self.timestamp_at(index)?;
        let mut values = Vec::new();
        for name in self.field_names() {
            let column = self
                .df
                .column(&name)
                .map_err(|e| TableError::ColumnNotFound(name.clone(), e))?;
            let value = column.f64().ok().and_then(|ca| ca.get(index));
            values.push((name, value));
        }
        Ok(Observation { timestamp, values })
    }

    fn time_column(&self) -> Result<&DatetimeChunked, TableError> {
        let column = self
            .df
            .column(COL_TIME)
            .map_err(|e| TableError::ColumnNotFound(COL_TIME.to_string(), e))?;
        Ok(column.datetime()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hour(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()
    }

    fn sample_table() -> RecordTable {
        RecordTable::from_parts(
            (0..4).map(hour).collect(),
            vec![
                ("temperature_2m", vec![Some(1.0), Some(2.0), None, Some(4.0)]),
                ("precipitation", vec![Some(0.0), Some(0.0), Some(0.3), Some(0.1)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn parse_utc_accepts_open_meteo_shapes() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap();
        assert_eq!(parse_utc("2024-01-01T13:00").unwrap(), expected);
        assert_eq!(parse_utc("2024-01-01T13:00:00").unwrap(), expected);
        assert_eq!(parse_utc("2024-01-01T13:00:00Z").unwrap(), expected);
        assert_eq!(parse_utc("2024-01-01T14:00:00+01:00").unwrap(), expected);

        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_utc("2024-01-01").unwrap(), midnight);
    }

    #[test]
    fn parse_utc_rejects_garbage() {
        let err = parse_utc("yesterday-ish").unwrap_err();
        assert!(matches!(err, TableError::MalformedTimestamp { .. }));
    }

    #[test]
    fn from_parts_builds_ordered_table() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert_eq!(table.field_names(), vec!["temperature_2m", "precipitation"]);
        assert_eq!(table.timestamp_at(0).unwrap(), hour(0));
        assert_eq!(table.last_timestamp().unwrap(), Some(hour(3)));
        assert_eq!(
            table.field("temperature_2m").unwrap(),
            vec![Some(1.0), Some(2.0), None, Some(4.0)]
        );
    }

    #[test]
    fn from_parts_rejects_unsorted_timestamps() {
        let err = RecordTable::from_parts(
            vec![hour(2), hour(1)],
            vec![("temperature_2m", vec![Some(1.0), Some(2.0)])],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::UnsortedInput { index: 1, .. }));
    }

    #[test]
    fn from_parts_allows_equal_adjacent_timestamps() {
        // Non-decreasing is the invariant; duplicates are the provider's call.
        let table = RecordTable::from_parts(
            vec![hour(1), hour(1)],
            vec![("temperature_2m", vec![Some(1.0), Some(2.0)])],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn from_parts_rejects_misaligned_fields() {
        let err = RecordTable::from_parts(
            vec![hour(0), hour(1)],
            vec![("precipitation", vec![Some(0.0)])],
        )
        .unwrap_err();
        match err {
            TableError::InconsistentSchema {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "precipitation");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn row_exposes_every_field() {
        let table = sample_table();
        let row = table.row(2).unwrap();
        assert_eq!(row.timestamp, hour(2));
        assert_eq!(row.value("temperature_2m"), None);
        assert_eq!(row.value("precipitation"), Some(0.3));
        assert_eq!(row.value("no_such_field"), None);
    }

    #[test]
    fn row_out_of_bounds_is_an_error() {
        let err = sample_table().row(99).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowOutOfBounds { index: 99, height: 4 }
        ));
    }

    #[test]
    fn empty_table_has_no_anchor() {
        let table =
            RecordTable::from_parts(vec![], vec![("temperature_2m", vec![])]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.last_timestamp().unwrap(), None);
    }
}
