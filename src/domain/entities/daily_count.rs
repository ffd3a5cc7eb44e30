//! Gap-filled daily publication counts.

use chrono::NaiveDate;
use serde::Serialize;

/// Number of articles published on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

impl DailyCount {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

/// A contiguous, strictly increasing daily series.
///
/// Every calendar day between the first and last date is present, with zero
/// counts where nothing was published. Built only by
/// [`crate::domain::aggregation::aggregate`], never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeries {
    days: Vec<DailyCount>,
}

impl DailySeries {
    /// Caller guarantees `days` is non-empty, contiguous and ascending.
    pub(crate) fn from_contiguous(days: Vec<DailyCount>) -> Self {
        debug_assert!(!days.is_empty());
        debug_assert!(
            days.windows(2)
                .all(|w| w[0].date.succ_opt() == Some(w[1].date))
        );
        Self { days }
    }

    pub fn days(&self) -> &[DailyCount] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    /// Sum of all daily counts.
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.count).sum()
    }

    /// Entries with `start <= date <= end`.
    ///
    /// The series is sorted, so the bounds are found by binary search.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> &[DailyCount] {
        let lo = self.days.partition_point(|d| d.date < start);
        let hi = self.days.partition_point(|d| d.date <= end);
        if lo >= hi { &[] } else { &self.days[lo..hi] }
    }
}
