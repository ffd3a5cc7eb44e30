//! DTOs for the full daily series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{DailyCount, DailySeries};

/// The gap-filled series, first to last observed day.
#[derive(Debug, Serialize)]
pub struct DailySeriesResponse {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub total: u64,
    pub days: Vec<DailyCount>,
}

impl From<&DailySeries> for DailySeriesResponse {
    fn from(series: &DailySeries) -> Self {
        Self {
            start: series.first_date(),
            end: series.last_date(),
            total: series.total(),
            days: series.days().to_vec(),
        }
    }
}
