//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Dataset**: Where it was loaded from and how many records it holds
/// 2. **Session**: Whether the date window session lock is usable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "dataset": {
///       "status": "ok",
///       "message": "1520 records from local file extended_dataset.csv, 2020-01-01..=2022-04-30"
///     },
///     "session": {
///       "status": "ok",
///       "message": "Revision 3"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let dataset_check = check_dataset(&state);
    let session_check = check_session(&state);

    let all_healthy = dataset_check.status == "ok" && session_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            dataset: dataset_check,
            session: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_dataset(state: &AppState) -> CheckStatus {
    let dataset = state.dashboard.dataset();
    let series = state.dashboard.series();

    match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "{} records from {}, {}..={}",
                dataset.len(),
                dataset.origin,
                first,
                last
            )),
        },
        _ => CheckStatus {
            status: "error".to_string(),
            message: Some("Daily series is empty".to_string()),
        },
    }
}

/// Checks that the window session mutex is not poisoned.
fn check_session(state: &AppState) -> CheckStatus {
    match state.session.lock() {
        Ok(session) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Revision {}", session.revision())),
        },
        Err(_) => CheckStatus {
            status: "error".to_string(),
            message: Some("Window session lock is poisoned".to_string()),
        },
    }
}
