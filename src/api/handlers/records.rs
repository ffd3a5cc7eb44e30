//! Handler for the raw records table.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::pagination::{PaginationMeta, RecordsQueryParams};
use crate::api::dto::records::RecordsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of dataset rows.
///
/// # Endpoint
///
/// `GET /api/records`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, min: 10, max: 1000)
/// - `topic` (optional): Keep only rows whose topic equals this value
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid or not numbers.
pub async fn records_handler(
    State(state): State<AppState>,
    params: Result<Query<RecordsQueryParams>, QueryRejection>,
) -> Result<Json<RecordsResponse>, AppError> {
    let Query(params) =
        params.map_err(|rejection| AppError::bad_request(rejection.body_text(), json!({})))?;

    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.pagination.page.unwrap_or(1);
    let page_size = params.pagination.page_size.unwrap_or(25);

    let records = state
        .dashboard
        .records(offset, limit, params.topic.as_deref());

    let rows = records
        .rows
        .into_iter()
        .map(|article| article.values.clone())
        .collect();

    Ok(Json(RecordsResponse {
        pagination: PaginationMeta::new(page, page_size, records.total),
        columns: state.dashboard.dataset().columns.clone(),
        rows,
    }))
}
