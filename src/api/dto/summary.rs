//! DTOs for the dataset summary table.

use serde::Serialize;

use crate::domain::summary::{SummaryRow, SummaryStats};

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_records: usize,
    pub rows: Vec<SummaryRow>,
}

impl From<&SummaryStats> for SummaryResponse {
    fn from(stats: &SummaryStats) -> Self {
        Self {
            total_records: stats.total,
            rows: stats.rows(),
        }
    }
}
