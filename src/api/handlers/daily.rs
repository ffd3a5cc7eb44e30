//! Handler for the full daily publication series.

use axum::{Json, extract::State};

use crate::api::dto::daily::DailySeriesResponse;
use crate::state::AppState;

/// Returns the gap-filled daily counts for the whole dataset.
///
/// # Endpoint
///
/// `GET /api/daily`
pub async fn daily_handler(State(state): State<AppState>) -> Json<DailySeriesResponse> {
    Json(DailySeriesResponse::from(state.dashboard.series().as_ref()))
}
