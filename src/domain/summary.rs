//! Dataset-wide descriptive counts, computed once.

use serde::Serialize;

use crate::domain::entities::{Article, Topic};

/// A count and its share of all records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub count: usize,
    /// Percent of the full record count, including records missing this field.
    pub percentage: f64,
}

impl Share {
    fn of(count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        Self { count, percentage }
    }
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub descriptor: String,
    pub value: usize,
    pub percentage: String,
}

/// Descriptive counts over the whole record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub with_publication_date: Share,
    pub topics: Vec<(Topic, Share)>,
    pub with_location: Share,
    pub with_city: Share,
    pub with_state: Share,
    pub with_country: Share,
}

impl SummaryStats {
    /// Share for one topic category.
    pub fn topic(&self, topic: Topic) -> Option<Share> {
        self.topics
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, share)| *share)
    }

    /// Rows for the summary table, in display order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        let mut rows = vec![SummaryRow {
            descriptor: "Total Articles".to_string(),
            value: self.total,
            percentage: "100%".to_string(),
        }];

        let row = |descriptor: String, share: &Share| SummaryRow {
            descriptor,
            value: share.count,
            percentage: format!("{:.2}%", share.percentage),
        };

        rows.push(row(
            "Articles with Publication Date".to_string(),
            &self.with_publication_date,
        ));
        rows.extend(
            self.topics
                .iter()
                .map(|(topic, share)| row(topic.label(), share)),
        );
        rows.push(row("Articles with Location".to_string(), &self.with_location));
        rows.push(row("Articles with City".to_string(), &self.with_city));
        rows.push(row("Articles with State".to_string(), &self.with_state));
        rows.push(row("Articles with Country".to_string(), &self.with_country));

        rows
    }
}

/// Computes the summary over the full, unfiltered record set.
pub fn summarize(articles: &[Article]) -> SummaryStats {
    let total = articles.len();
    let count = |pred: fn(&Article) -> bool| articles.iter().filter(|a| pred(a)).count();

    let topics = Topic::ALL
        .iter()
        .map(|topic| {
            let n = articles.iter().filter(|a| topic.matches(&a.topic)).count();
            (*topic, Share::of(n, total))
        })
        .collect();

    SummaryStats {
        total,
        with_publication_date: Share::of(count(Article::has_known_date), total),
        topics,
        with_location: Share::of(count(Article::has_known_location), total),
        with_city: Share::of(count(Article::has_known_city), total),
        with_state: Share::of(count(Article::has_known_state), total),
        with_country: Share::of(count(Article::has_known_country), total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Article> {
        vec![
            Article::new("2024-01-01", "business", "Boston", "Massachusetts", "United States"),
            Article::new("Unknown", "sport", "Unknown", "Unknown", "England"),
            Article::new("2024-01-02", "tech", "Unknown", "Unknown", "Unknown"),
            Article::new("garbage", "Tech", "Paris", "Unknown", "France"),
        ]
    }

    #[test]
    fn test_counts_against_full_denominator() {
        let s = summarize(&sample());

        assert_eq!(s.total, 4);
        // "garbage" is not the sentinel, so it counts as a known date here.
        assert_eq!(s.with_publication_date.count, 3);
        assert!((s.with_publication_date.percentage - 75.0).abs() < 1e-9);
        assert_eq!(s.with_city.count, 2);
        assert_eq!(s.with_state.count, 1);
        assert_eq!(s.with_country.count, 3);
        assert_eq!(s.with_location.count, 3);
    }

    #[test]
    fn test_topics_match_exactly() {
        let s = summarize(&sample());

        assert_eq!(s.topic(Topic::Tech).unwrap().count, 1);
        assert_eq!(s.topic(Topic::Business).unwrap().count, 1);
        assert_eq!(s.topic(Topic::Politics).unwrap().count, 0);

        let sum: f64 = s.topics.iter().map(|(_, share)| share.percentage).sum();
        assert!(sum <= 100.0);
        assert!((sum - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_layout() {
        let rows = summarize(&sample()).rows();

        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].descriptor, "Total Articles");
        assert_eq!(rows[0].percentage, "100%");
        assert_eq!(rows[1].percentage, "75.00%");
        assert_eq!(rows[2].descriptor, "Business related topic");
        assert_eq!(rows[2].percentage, "25.00%");
        assert_eq!(rows[10].descriptor, "Articles with Country");
    }

    #[test]
    fn test_empty_record_set_has_zero_percentages() {
        let s = summarize(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.with_city.percentage, 0.0);
    }
}
