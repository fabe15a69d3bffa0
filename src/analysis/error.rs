use crate::table::error::TableError;
use chrono::{Duration, NaiveDate};
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Cannot anchor the '{window}' window: the table has no rows")]
    EmptyTable { window: String },

    #[error("Day limit {days} outside the supported range 1..=90")]
    OutOfRange { days: i64 },

    #[error("Trailing window duration must be positive, got {0}")]
    NonPositiveDuration(Duration),

    #[error("Date arithmetic overflowed past {date}")]
    DateOverflow { date: NaiveDate },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error(transparent)]
    Table(#[from] TableError),
}
