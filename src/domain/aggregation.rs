//! Date aggregation: raw articles into a gap-filled daily series.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::entities::{Article, DailyCount, DailySeries, is_known};
use crate::domain::errors::DatasetError;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Parses a `publication_date` cell to its calendar date.
///
/// Returns `None` for the `"Unknown"` sentinel and for anything that does not
/// parse. A bad cell is treated as missing, never as an error.
pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() || !is_known(raw) {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Builds the daily series from the full record set.
///
/// 1. drop unknown and unparseable dates
/// 2. count articles per calendar date
/// 3. walk every day from the earliest to the latest date, filling zeros
///
/// # Errors
///
/// Returns [`DatasetError::EmptyData`] when no article has a usable date,
/// since there is no range to build.
pub fn aggregate(articles: &[Article]) -> Result<DailySeries, DatasetError> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut unparseable = 0usize;

    for article in articles.iter().filter(|a| a.has_known_date()) {
        match parse_publication_date(&article.publication_date) {
            Some(date) => *per_day.entry(date).or_default() += 1,
            None => unparseable += 1,
        }
    }

    if unparseable > 0 {
        tracing::debug!(unparseable, "Skipped publication dates that failed to parse");
    }

    let (Some((&first, _)), Some((&last, _))) =
        (per_day.first_key_value(), per_day.last_key_value())
    else {
        return Err(DatasetError::EmptyData);
    };

    let days = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| DailyCount::new(date, per_day.get(&date).copied().unwrap_or(0)))
        .collect();

    Ok(DailySeries::from_contiguous(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dated(date: &str) -> Article {
        Article::new(date, "tech", "Unknown", "Unknown", "Unknown")
    }

    #[test]
    fn test_parse_supported_formats() {
        let expected = Some(d(2023, 5, 12));
        assert_eq!(parse_publication_date("2023-05-12 14:30"), expected);
        assert_eq!(parse_publication_date("2023-05-12 14:30:59"), expected);
        assert_eq!(parse_publication_date("2023-05-12T23:10:00+02:00"), expected);
        assert_eq!(parse_publication_date("2023-05-12"), expected);
        assert_eq!(parse_publication_date("2023/05/12"), expected);
        assert_eq!(parse_publication_date("12/05/2023"), expected);
    }

    #[test]
    fn test_parse_rejects_sentinel_and_garbage() {
        assert_eq!(parse_publication_date("Unknown"), None);
        assert_eq!(parse_publication_date(""), None);
        assert_eq!(parse_publication_date("yesterday"), None);
        assert_eq!(parse_publication_date("2023-02-30"), None);
    }

    #[test]
    fn test_gap_filled_scenario() {
        let articles = vec![
            dated("2024-01-01"),
            dated("2024-01-01"),
            dated("2024-01-03"),
            dated("Unknown"),
        ];

        let series = aggregate(&articles).unwrap();

        assert_eq!(
            series.days(),
            &[
                DailyCount::new(d(2024, 1, 1), 2),
                DailyCount::new(d(2024, 1, 2), 0),
                DailyCount::new(d(2024, 1, 3), 1),
            ]
        );
    }

    #[test]
    fn test_series_is_contiguous_and_sums_to_known_dates() {
        let articles = vec![
            dated("2024-02-27 08:00"),
            dated("2024-03-02 10:15"),
            dated("not a date"),
            dated("Unknown"),
            dated("2024-02-28"),
            dated("2024-03-02"),
        ];

        let series = aggregate(&articles).unwrap();

        // 2024 is a leap year: 27, 28, 29 Feb, 1, 2 Mar.
        assert_eq!(series.len(), 5);
        assert_eq!(series.first_date(), Some(d(2024, 2, 27)));
        assert_eq!(series.last_date(), Some(d(2024, 3, 2)));
        assert!(
            series
                .days()
                .windows(2)
                .all(|w| w[0].date.succ_opt() == Some(w[1].date))
        );
        assert_eq!(series.total(), 4);
    }

    #[test]
    fn test_single_day_series() {
        let series = aggregate(&[dated("2024-06-01 12:00")]).unwrap();
        assert_eq!(series.days(), &[DailyCount::new(d(2024, 6, 1), 1)]);
    }

    #[test]
    fn test_no_known_dates_is_empty_data_error() {
        let articles = vec![dated("Unknown"), dated("garbage")];
        assert!(matches!(aggregate(&articles), Err(DatasetError::EmptyData)));
        assert!(matches!(aggregate(&[]), Err(DatasetError::EmptyData)));
    }

    #[test]
    fn test_range_lookup() {
        let series = aggregate(&[dated("2024-01-01"), dated("2024-01-05")]).unwrap();
        assert_eq!(series.range(d(2024, 1, 2), d(2024, 1, 3)).len(), 2);
        assert!(series.range(d(2024, 2, 1), d(2024, 2, 3)).is_empty());
        assert_eq!(series.range(d(2023, 12, 1), d(2024, 1, 1)).len(), 1);
    }
}
