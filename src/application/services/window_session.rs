//! The single active date-window session.
//!
//! Owns the window and the latest derived view. Every change to either
//! endpoint is one event: normalize, recompute in full, notify observers,
//! return. Nothing is deferred, so consecutive changes never observe a stale
//! result.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{DailySeries, DateWindow};
use crate::domain::errors::WindowError;
use crate::domain::window_view::{FilteredWindowView, apply_window};

/// Result of the most recent recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowState {
    Ready(FilteredWindowView),
    /// The window selects no days.
    NoData(WindowError),
}

impl WindowState {
    pub fn view(&self) -> Option<&FilteredWindowView> {
        match self {
            WindowState::Ready(view) => Some(view),
            WindowState::NoData(_) => None,
        }
    }
}

/// Notification pushed to observers after each recompute.
#[derive(Debug, Clone, Copy)]
pub struct WindowUpdate<'a> {
    pub revision: u64,
    pub window: DateWindow,
    /// The requested endpoints were reversed and have been swapped.
    pub swapped: bool,
    pub state: &'a WindowState,
}

/// Receives every window change, e.g. a renderer or a logger.
pub trait WindowObserver: Send {
    fn on_update(&mut self, update: &WindowUpdate<'_>);
}

/// Logs each recompute and counts them.
pub struct TracingObserver;

impl WindowObserver for TracingObserver {
    fn on_update(&mut self, update: &WindowUpdate<'_>) {
        metrics::counter!("dashboard_window_updates_total").increment(1);
        match update.state {
            WindowState::Ready(view) => tracing::info!(
                revision = update.revision,
                window = %update.window,
                swapped = update.swapped,
                days = view.stats.days,
                total = view.stats.total,
                "Window recomputed"
            ),
            WindowState::NoData(e) => {
                metrics::counter!("dashboard_window_empty_total").increment(1);
                tracing::info!(
                    revision = update.revision,
                    window = %update.window,
                    swapped = update.swapped,
                    span_days = update.window.len_days(),
                    "Window selects no data: {e}"
                );
            }
        }
    }
}

/// View state for the date-published tab.
pub struct WindowSession {
    series: Arc<DailySeries>,
    bounds: (NaiveDate, NaiveDate),
    window: DateWindow,
    state: WindowState,
    revision: u64,
    last_swapped: bool,
    observers: Vec<Box<dyn WindowObserver>>,
}

impl WindowSession {
    /// Opens a session showing the full series.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Empty`] only if `series` is empty, which
    /// [`crate::domain::aggregation::aggregate`] never produces.
    pub fn new(series: Arc<DailySeries>) -> Result<Self, WindowError> {
        let bounds = full_range(&series)?;
        let window = DateWindow::new(bounds.0, bounds.1);
        let state = compute(&series, window);

        Ok(Self {
            series,
            bounds,
            window,
            state,
            revision: 0,
            last_swapped: false,
            observers: Vec::new(),
        })
    }

    /// Registers an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: Box<dyn WindowObserver>) {
        self.observers.push(observer);
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the last change had its endpoints swapped.
    pub fn last_swapped(&self) -> bool {
        self.last_swapped
    }

    /// First and last day of the full series, the limits of both controls.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        self.bounds
    }

    pub fn series(&self) -> &Arc<DailySeries> {
        &self.series
    }

    /// Moves the start control.
    pub fn set_start(&mut self, start: NaiveDate) -> &WindowState {
        self.apply(DateWindow::new(start, self.window.end))
    }

    /// Moves the end control.
    pub fn set_end(&mut self, end: NaiveDate) -> &WindowState {
        self.apply(DateWindow::new(self.window.start, end))
    }

    /// Moves both controls as one change.
    pub fn set_window(&mut self, start: NaiveDate, end: NaiveDate) -> &WindowState {
        self.apply(DateWindow::new(start, end))
    }

    /// Back to the full series range.
    pub fn reset(&mut self) -> &WindowState {
        let (start, end) = self.bounds();
        self.apply(DateWindow::new(start, end))
    }

    fn apply(&mut self, mut window: DateWindow) -> &WindowState {
        let swapped = window.normalize();

        self.window = window;
        self.state = compute(&self.series, window);
        self.revision += 1;
        self.last_swapped = swapped;

        let update = WindowUpdate {
            revision: self.revision,
            window: self.window,
            swapped,
            state: &self.state,
        };
        for observer in &mut self.observers {
            observer.on_update(&update);
        }

        &self.state
    }
}

fn full_range(series: &DailySeries) -> Result<(NaiveDate, NaiveDate), WindowError> {
    match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(WindowError::Empty {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }),
    }
}

fn compute(series: &DailySeries, window: DateWindow) -> WindowState {
    match apply_window(series, window) {
        Ok(view) => WindowState::Ready(view),
        Err(e) => WindowState::NoData(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::aggregate;
    use crate::domain::entities::Article;
    use std::sync::Mutex;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn session() -> WindowSession {
        let articles: Vec<Article> = ["2024-01-01", "2024-01-01", "2024-01-03"]
            .iter()
            .map(|date| Article::new(*date, "tech", "Unknown", "Unknown", "Unknown"))
            .collect();
        WindowSession::new(Arc::new(aggregate(&articles).unwrap())).unwrap()
    }

    /// Records (revision, total) for every update it sees.
    struct Recorder(Arc<Mutex<Vec<(u64, Option<u64>)>>>);

    impl WindowObserver for Recorder {
        fn on_update(&mut self, update: &WindowUpdate<'_>) {
            let total = update.state.view().map(|v| v.stats.total);
            self.0.lock().unwrap().push((update.revision, total));
        }
    }

    #[test]
    fn test_initial_window_is_full_range() {
        let s = session();
        assert_eq!(s.window(), DateWindow::new(d(2024, 1, 1), d(2024, 1, 3)));
        assert_eq!(s.revision(), 0);
        assert_eq!(s.state().view().unwrap().stats.total, 3);
    }

    #[test]
    fn test_reversed_endpoints_are_swapped_in_session_state() {
        let mut s = session();

        s.set_start(d(2024, 1, 3));
        s.set_end(d(2024, 1, 1));

        assert_eq!(s.window(), DateWindow::new(d(2024, 1, 1), d(2024, 1, 3)));
        assert!(s.last_swapped());
    }

    #[test]
    fn test_each_change_recomputes_before_the_next() {
        let mut s = session();
        let log = Arc::new(Mutex::new(Vec::new()));
        s.subscribe(Box::new(Recorder(log.clone())));

        let first = s.set_end(d(2024, 1, 2)).view().unwrap().stats.total;
        assert_eq!(first, 2);
        let second = s.set_start(d(2024, 1, 2)).view().unwrap().stats.total;
        assert_eq!(second, 0);

        assert_eq!(*log.lock().unwrap(), vec![(1, Some(2)), (2, Some(0))]);
    }

    #[test]
    fn test_window_past_data_is_no_data_state() {
        let mut s = session();

        let state = s.set_window(d(2024, 2, 1), d(2024, 2, 5)).clone();

        assert_eq!(
            state,
            WindowState::NoData(WindowError::Empty {
                start: d(2024, 2, 1),
                end: d(2024, 2, 5)
            })
        );

        s.reset();
        assert_eq!(s.state().view().unwrap().stats.total, 3);
        assert_eq!(s.revision(), 2);
    }
}
