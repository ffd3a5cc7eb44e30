//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::application::services::WindowState;
use crate::domain::locations::PlaceCount;
use crate::domain::summary::SummaryRow;
use crate::domain::topics::TopicShare;
use crate::domain::window_view::StatPane;
use crate::error::{AppError, session_poisoned};
use crate::state::AppState;

/// Rows shown per page of the "All data" table.
pub const RECORDS_PAGE_SIZE: usize = 25;

/// A topic row with numbers already formatted for display.
pub struct TopicRow {
    pub topic: String,
    pub count: usize,
    pub percentage: String,
    pub sentiment: String,
}

impl From<&TopicShare> for TopicRow {
    fn from(share: &TopicShare) -> Self {
        Self {
            topic: share.topic.clone(),
            count: share.count,
            percentage: format!("{:.2}%", share.percentage),
            sentiment: share
                .average_sentiment
                .map(|s| format!("{s:.3}"))
                .unwrap_or_else(|| "n/a".to_string()),
        }
    }
}

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with five tabs:
/// - Summary table and the first page of all rows
/// - Date published chart with the window controls and stat panes
/// - Topics
/// - US states
/// - Countries
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub summary: Vec<SummaryRow>,
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
    pub record_total: usize,
    pub page_size: usize,
    pub topics: Vec<TopicRow>,
    pub states: Vec<PlaceCount>,
    pub countries: Vec<PlaceCount>,
    pub min_date: String,
    pub max_date: String,
    pub start: String,
    pub end: String,
    pub panes: Vec<StatPane>,
    pub message: Option<String>,
}

/// Renders the dashboard page from the precomputed views and the current
/// window.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/dashboard.html`. The chart itself is drawn by
/// `static/dashboard.js` from `/api/window`; further pages of the "All data"
/// table come from `/api/records`.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let dashboard = &state.dashboard;
    let session = state.session.lock().map_err(session_poisoned)?;

    let (min, max) = session.bounds();
    let window = session.window();
    let (panes, message) = match session.state() {
        WindowState::Ready(view) => (view.stats.panes(), None),
        WindowState::NoData(e) => (Vec::new(), Some(e.to_string())),
    };

    let first_page = dashboard.records(0, RECORDS_PAGE_SIZE, None);

    Ok(DashboardTemplate {
        summary: dashboard.summary().rows(),
        columns: dashboard.dataset().columns.clone(),
        records: first_page
            .rows
            .into_iter()
            .map(|article| article.values.clone())
            .collect(),
        record_total: first_page.total,
        page_size: RECORDS_PAGE_SIZE,
        topics: dashboard.topics().iter().map(TopicRow::from).collect(),
        states: dashboard.states().to_vec(),
        countries: dashboard.countries().to_vec(),
        min_date: min.to_string(),
        max_date: max.to_string(),
        start: window.start.to_string(),
        end: window.end.to_string(),
        panes,
        message,
    })
}
