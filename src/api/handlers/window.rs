//! Handlers for the shared date window.
//!
//! The window is held in a single [`crate::application::services::WindowSession`]
//! per process. Every change produces a fresh view of the series; an empty
//! window is a regular `no_data` response rather than an error.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::json;

use crate::api::dto::window::{
    WindowPatchRequest, WindowPreviewQuery, WindowPreviewResponse, WindowResponse,
};
use crate::domain::entities::DateWindow;
use crate::domain::window_view::apply_window;
use crate::error::{AppError, session_poisoned};
use crate::state::AppState;

/// Returns the current window and its view.
///
/// # Endpoint
///
/// `GET /api/window`
pub async fn get_window_handler(
    State(state): State<AppState>,
) -> Result<Json<WindowResponse>, AppError> {
    let session = state.session.lock().map_err(session_poisoned)?;
    Ok(Json(WindowResponse::from(&*session)))
}

/// Applies a change from the date controls.
///
/// # Endpoint
///
/// `PATCH /api/window`
///
/// # Request Body
///
/// ```json
/// { "start": "2021-03-01", "end": "2021-03-31" }
/// ```
///
/// Either field may be omitted to keep the current value. Dates outside the
/// dataset range are accepted and simply select fewer days. If the resulting
/// start is after the end, the two are swapped and `swapped` is set.
///
/// # Errors
///
/// Returns 400 Bad Request if neither field is present or the body is not a
/// valid request (malformed JSON, dates not in `YYYY-MM-DD` form).
pub async fn patch_window_handler(
    State(state): State<AppState>,
    payload: Result<Json<WindowPatchRequest>, JsonRejection>,
) -> Result<Json<WindowResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text(), json!({})))?;

    let mut session = state.session.lock().map_err(session_poisoned)?;

    match (payload.start, payload.end) {
        (Some(start), Some(end)) => {
            session.set_window(start, end);
        }
        (Some(start), None) => {
            session.set_start(start);
        }
        (None, Some(end)) => {
            session.set_end(end);
        }
        (None, None) => {
            return Err(AppError::bad_request(
                "At least one of 'start' or 'end' is required",
                json!({ "fields": ["start", "end"] }),
            ));
        }
    }

    Ok(Json(WindowResponse::from(&*session)))
}

/// Restores the window to the full dataset range.
///
/// # Endpoint
///
/// `POST /api/window/reset`
pub async fn reset_window_handler(
    State(state): State<AppState>,
) -> Result<Json<WindowResponse>, AppError> {
    let mut session = state.session.lock().map_err(session_poisoned)?;
    session.reset();
    Ok(Json(WindowResponse::from(&*session)))
}

/// Computes the view for a window without touching the session.
///
/// # Endpoint
///
/// `GET /api/window/preview?start=2021-03-01&end=2021-03-31`
///
/// Reversed endpoints are swapped, as for `PATCH /api/window`.
///
/// # Errors
///
/// Returns 404 Not Found if the window selects no days, and 400 Bad Request
/// if either date is missing or malformed.
pub async fn preview_window_handler(
    State(state): State<AppState>,
    query: Result<Query<WindowPreviewQuery>, QueryRejection>,
) -> Result<Json<WindowPreviewResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::bad_request(rejection.body_text(), json!({ "fields": ["start", "end"] }))
    })?;

    let view = apply_window(
        state.dashboard.series(),
        DateWindow::new(query.start, query.end),
    )?;

    Ok(Json(WindowPreviewResponse {
        window: view.window,
        state: (&view).into(),
    }))
}
