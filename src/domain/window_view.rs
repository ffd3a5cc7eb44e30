//! Range-filtered view over the daily series.
//!
//! [`apply_window`] is the pure transform re-run on every window change: it
//! normalizes the window, slices the series and recomputes the statistics in
//! full. There is no incremental update.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{DailyCount, DailySeries, DateWindow};
use crate::domain::errors::WindowError;

/// Visible x-axis range of the chart.
///
/// Tracks the plotted data, not the requested window, so a window that runs
/// past the data still shows no empty margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A minimum or maximum daily count and the day it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Extreme {
    pub count: u64,
    pub date: NaiveDate,
}

/// Statistics over the filtered days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    pub total: u64,
    pub min: Extreme,
    pub max: Extreme,
    /// `total / days`, zero-count days included in the denominator.
    pub mean: f64,
    pub days: usize,
}

/// One labelled text pane next to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatPane {
    pub label: &'static str,
    pub value: String,
}

impl WindowStats {
    /// Computes statistics for a non-empty slice of days.
    ///
    /// Ties on min/max go to the earliest date. Returns `None` for an empty
    /// slice.
    pub fn compute(days: &[DailyCount]) -> Option<Self> {
        let first = days.first()?;

        let mut total = 0u64;
        let mut min = Extreme {
            count: first.count,
            date: first.date,
        };
        let mut max = min;

        for day in days {
            total += day.count;
            if day.count < min.count {
                min = Extreme {
                    count: day.count,
                    date: day.date,
                };
            }
            if day.count > max.count {
                max = Extreme {
                    count: day.count,
                    date: day.date,
                };
            }
        }

        Some(Self {
            total,
            min,
            max,
            mean: total as f64 / days.len() as f64,
            days: days.len(),
        })
    }

    /// The four summary panes shown beside the chart.
    pub fn panes(&self) -> Vec<StatPane> {
        vec![
            StatPane {
                label: "Total Published Articles",
                value: self.total.to_string(),
            },
            StatPane {
                label: "Minimum Published Articles",
                value: format!("{} (Date: {})", self.min.count, self.min.date),
            },
            StatPane {
                label: "Maximum Published Articles",
                value: format!("{} (Date: {})", self.max.count, self.max.date),
            },
            StatPane {
                label: "Average Published Articles",
                value: format!("{:.2}", self.mean),
            },
        ]
    }
}

/// Read-only projection of the series onto one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredWindowView {
    pub window: DateWindow,
    pub axis: AxisBounds,
    pub days: Vec<DailyCount>,
    pub stats: WindowStats,
}

/// Filters the series to `window` (normalized first) and recomputes statistics.
///
/// # Errors
///
/// Returns [`WindowError::Empty`] when the window lies entirely outside the
/// series, so callers render a "no data in range" state.
pub fn apply_window(
    series: &DailySeries,
    window: DateWindow,
) -> Result<FilteredWindowView, WindowError> {
    let window = window.normalized();
    let days = series.range(window.start, window.end);

    let (Some(first), Some(last), Some(stats)) =
        (days.first(), days.last(), WindowStats::compute(days))
    else {
        return Err(WindowError::Empty {
            start: window.start,
            end: window.end,
        });
    };

    Ok(FilteredWindowView {
        window,
        axis: AxisBounds {
            start: first.date,
            end: last.date,
        },
        days: days.to_vec(),
        stats,
    })
}
