//! API route configuration.

use crate::api::handlers::{
    countries_handler, daily_handler, get_window_handler, patch_window_handler,
    preview_window_handler, records_handler, reset_window_handler, states_handler,
    summary_handler, topics_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET   /daily`                - Full gap-filled daily series
/// - `GET   /window`               - Current date window and its view
/// - `PATCH /window`               - Move one or both window endpoints
/// - `POST  /window/reset`         - Restore the full range
/// - `GET   /window/preview`       - View for a window, session untouched
/// - `GET   /summary`              - Summary table rows
/// - `GET   /topics`               - Per-topic counts and sentiment
/// - `GET   /locations/states`     - Per-state counts
/// - `GET   /locations/countries`  - Per-country counts
/// - `GET   /records`              - Raw rows (paginated)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/daily", get(daily_handler))
        .route(
            "/window",
            get(get_window_handler).patch(patch_window_handler),
        )
        .route("/window/reset", post(reset_window_handler))
        .route("/window/preview", get(preview_window_handler))
        .route("/summary", get(summary_handler))
        .route("/topics", get(topics_handler))
        .route("/locations/states", get(states_handler))
        .route("/locations/countries", get(countries_handler))
        .route("/records", get(records_handler))
}
