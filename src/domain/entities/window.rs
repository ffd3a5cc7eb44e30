//! The active date filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `[start, end]` filter over the daily series.
///
/// May be constructed out of order; [`DateWindow::normalize`] puts it back
/// into `start <= end` by swapping the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Swaps the endpoints if they are reversed.
    ///
    /// Returns `true` when a swap happened.
    pub fn normalize(&mut self) -> bool {
        if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
            true
        } else {
            false
        }
    }

    /// A normalized copy.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, inclusive. Assumes normalized.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_normalize_swaps_reversed_endpoints() {
        let mut w = DateWindow::new(d(2024, 1, 5), d(2024, 1, 2));
        assert!(w.normalize());
        assert_eq!(w, DateWindow::new(d(2024, 1, 2), d(2024, 1, 5)));
        assert!(!w.normalize());
    }

    #[test]
    fn test_single_day_window() {
        let w = DateWindow::new(d(2024, 3, 1), d(2024, 3, 1));
        assert_eq!(w.len_days(), 1);
        assert!(w.contains(d(2024, 3, 1)));
        assert!(!w.contains(d(2024, 3, 2)));
    }
}
