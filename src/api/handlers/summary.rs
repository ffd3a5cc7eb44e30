//! Handler for the summary table.

use axum::{Json, extract::State};

use crate::api::dto::summary::SummaryResponse;
use crate::state::AppState;

/// Returns the eleven descriptor rows of the summary table.
///
/// # Endpoint
///
/// `GET /api/summary`
///
/// # Response
///
/// ```json
/// {
///   "total_records": 4,
///   "rows": [
///     { "descriptor": "Total Articles", "value": 4, "percentage": "100%" },
///     { "descriptor": "Articles with Publication Date", "value": 4, "percentage": "100.00%" }
///   ]
/// }
/// ```
pub async fn summary_handler(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(state.dashboard.summary().into())
}
