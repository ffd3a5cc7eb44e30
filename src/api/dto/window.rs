//! DTOs for the interactive date window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::{WindowSession, WindowState};
use crate::domain::entities::{DailyCount, DateWindow};
use crate::domain::window_view::{AxisBounds, FilteredWindowView, StatPane, WindowStats};

/// Change event from the date controls. Either endpoint may be omitted.
#[derive(Debug, Deserialize)]
pub struct WindowPatchRequest {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Query for a window preview. Both endpoints are required.
#[derive(Debug, Deserialize)]
pub struct WindowPreviewQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Limits of the two date controls.
#[derive(Debug, Serialize)]
pub struct ControlBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Current session window and its derived view.
#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub revision: u64,
    /// True when the last change arrived with `start > end` and was swapped.
    pub swapped: bool,
    pub bounds: ControlBounds,
    pub window: DateWindow,
    #[serde(flatten)]
    pub state: WindowStateBody,
}

/// Either the computed view or the "no data in range" state.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WindowStateBody {
    Ready {
        axis: AxisBounds,
        days: Vec<DailyCount>,
        stats: WindowStats,
        panes: Vec<StatPane>,
    },
    NoData {
        message: String,
    },
}

/// A window view computed outside the session.
#[derive(Debug, Serialize)]
pub struct WindowPreviewResponse {
    pub window: DateWindow,
    #[serde(flatten)]
    pub state: WindowStateBody,
}

impl From<&FilteredWindowView> for WindowStateBody {
    fn from(view: &FilteredWindowView) -> Self {
        WindowStateBody::Ready {
            axis: view.axis,
            days: view.days.clone(),
            stats: view.stats,
            panes: view.stats.panes(),
        }
    }
}

impl From<&WindowState> for WindowStateBody {
    fn from(state: &WindowState) -> Self {
        match state {
            WindowState::Ready(view) => view.into(),
            WindowState::NoData(e) => WindowStateBody::NoData {
                message: e.to_string(),
            },
        }
    }
}

impl From<&WindowSession> for WindowResponse {
    fn from(session: &WindowSession) -> Self {
        let (min, max) = session.bounds();
        Self {
            revision: session.revision(),
            swapped: session.last_swapped(),
            bounds: ControlBounds { min, max },
            window: session.window(),
            state: session.state().into(),
        }
    }
}
