//! Views computed once from the loaded dataset.

use std::sync::Arc;

use crate::application::services::window_session::WindowSession;
use crate::domain::aggregation::aggregate;
use crate::domain::entities::{Article, DailySeries, Dataset};
use crate::domain::errors::{DatasetError, WindowError};
use crate::domain::locations::{PlaceCount, country_counts, state_counts};
use crate::domain::summary::{SummaryStats, summarize};
use crate::domain::topics::{TopicShare, topic_breakdown};

/// One page of raw records.
#[derive(Debug, Clone)]
pub struct RecordPage<'a> {
    pub total: usize,
    pub rows: Vec<&'a Article>,
}

/// Holds the dataset and every view that does not depend on user input.
///
/// Built once at startup; read-only afterwards.
#[derive(Debug)]
pub struct DashboardService {
    dataset: Dataset,
    series: Arc<DailySeries>,
    summary: SummaryStats,
    topics: Vec<TopicShare>,
    states: Vec<PlaceCount>,
    countries: Vec<PlaceCount>,
}

impl DashboardService {
    /// Aggregates the dataset and precomputes the static views.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::EmptyData`] when no article has a usable
    /// publication date.
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        let series = Arc::new(aggregate(&dataset.articles)?);
        let summary = summarize(&dataset.articles);
        let topics = topic_breakdown(&dataset.articles);
        let states = state_counts(&dataset.articles);
        let countries = country_counts(&dataset.articles);

        metrics::gauge!("dashboard_records_loaded").set(dataset.len() as f64);
        tracing::info!(
            records = dataset.len(),
            days = series.len(),
            first = ?series.first_date(),
            last = ?series.last_date(),
            "Dashboard views computed"
        );

        Ok(Self {
            dataset,
            series,
            summary,
            topics,
            states,
            countries,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn series(&self) -> &Arc<DailySeries> {
        &self.series
    }

    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn topics(&self) -> &[TopicShare] {
        &self.topics
    }

    pub fn states(&self) -> &[PlaceCount] {
        &self.states
    }

    pub fn countries(&self) -> &[PlaceCount] {
        &self.countries
    }

    /// Opens a window session over the full series.
    ///
    /// # Errors
    ///
    /// Propagates [`WindowError`] from [`WindowSession::new`].
    pub fn open_session(&self) -> Result<WindowSession, WindowError> {
        WindowSession::new(self.series.clone())
    }

    /// Returns one page of records, optionally restricted to an exact topic.
    pub fn records(&self, offset: usize, limit: usize, topic: Option<&str>) -> RecordPage<'_> {
        let matches = |a: &&Article| topic.is_none_or(|t| a.topic == t);

        let total = self.dataset.articles.iter().filter(matches).count();
        let rows = self
            .dataset
            .articles
            .iter()
            .filter(matches)
            .skip(offset)
            .take(limit)
            .collect();

        RecordPage { total, rows }
    }
}
