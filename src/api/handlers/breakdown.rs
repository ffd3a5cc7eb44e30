//! Handlers for topic and location breakdowns.

use axum::{Json, extract::State};

use crate::api::dto::breakdown::{PlacesResponse, TopicsResponse};
use crate::state::AppState;

/// Article count, share and mean sentiment per topic.
///
/// # Endpoint
///
/// `GET /api/topics`
pub async fn topics_handler(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        items: state.dashboard.topics().to_vec(),
    })
}

/// Article counts per US state.
///
/// # Endpoint
///
/// `GET /api/locations/states`
pub async fn states_handler(State(state): State<AppState>) -> Json<PlacesResponse> {
    Json(state.dashboard.states().into())
}

/// Article counts per country, US states folded into the USA.
///
/// # Endpoint
///
/// `GET /api/locations/countries`
pub async fn countries_handler(State(state): State<AppState>) -> Json<PlacesResponse> {
    Json(state.dashboard.countries().into())
}
