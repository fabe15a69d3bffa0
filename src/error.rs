use crate::analysis::error::AnalysisError;
use crate::table::error::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoviewError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
