//! Domain error types.

use chrono::NaiveDate;

use crate::domain::repositories::SourceError;

/// Errors raised while loading or aggregating the dataset.
///
/// All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("no record has a known, parseable publication date")]
    EmptyData,

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Raised when a window selects no days at all.
///
/// Rendered as the "no data in range" state, never as zeroed statistics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("no data between {start} and {end}")]
    Empty { start: NaiveDate, end: NaiveDate },
}
