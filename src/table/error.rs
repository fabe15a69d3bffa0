use chrono::{DateTime, Utc};
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Could not parse timestamp '{value}' as a UTC instant")]
    MalformedTimestamp { value: String },

    #[error("Timestamps are not in ascending order: row {index} ({current}) precedes {previous}")]
    UnsortedInput {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("Field '{field}' has {found} values but the time column has {expected}")]
    InconsistentSchema {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Row index {index} out of bounds for a table of {height} rows")]
    RowOutOfBounds { index: usize, height: usize },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
