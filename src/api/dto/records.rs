//! DTOs for the raw records table.

use serde::Serialize;

use super::pagination::PaginationMeta;

/// One page of the dataset, cells in column order.
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub pagination: PaginationMeta,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
