//! Per-topic counts and mean sentiment.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::Article;

/// Article count, share and mean sentiment for one topic value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicShare {
    pub topic: String,
    pub count: usize,
    pub percentage: f64,
    pub average_sentiment: Option<f64>,
}

#[derive(Default)]
struct Acc {
    count: usize,
    sentiment_sum: f64,
    sentiment_n: usize,
}

/// Groups by the raw `topic` value.
///
/// Sorted by count descending, then topic name.
pub fn topic_breakdown(articles: &[Article]) -> Vec<TopicShare> {
    let total = articles.len();
    let mut groups: HashMap<&str, Acc> = HashMap::new();

    for article in articles {
        let acc = groups.entry(article.topic.as_str()).or_default();
        acc.count += 1;
        if let Some(score) = article.sentiment_score {
            acc.sentiment_sum += score;
            acc.sentiment_n += 1;
        }
    }

    let mut out: Vec<TopicShare> = groups
        .into_iter()
        .map(|(topic, acc)| TopicShare {
            topic: topic.to_string(),
            count: acc.count,
            percentage: if total == 0 {
                0.0
            } else {
                acc.count as f64 / total as f64 * 100.0
            },
            average_sentiment: (acc.sentiment_n > 0)
                .then(|| acc.sentiment_sum / acc.sentiment_n as f64),
        })
        .collect();

    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(topic: &str, score: Option<f64>) -> Article {
        let a = Article::new("Unknown", topic, "Unknown", "Unknown", "Unknown");
        match score {
            Some(s) => a.with_sentiment(s),
            None => a,
        }
    }

    #[test]
    fn test_breakdown_orders_and_averages() {
        let articles = vec![
            article("tech", Some(0.5)),
            article("tech", Some(-0.1)),
            article("sport", None),
            article("business", Some(0.2)),
            article("tech", None),
        ];

        let out = topic_breakdown(&articles);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].topic, "tech");
        assert_eq!(out[0].count, 3);
        assert!((out[0].percentage - 60.0).abs() < 1e-9);
        assert!((out[0].average_sentiment.unwrap() - 0.2).abs() < 1e-9);
        // Ties on count fall back to name order.
        assert_eq!(out[1].topic, "business");
        assert_eq!(out[2].topic, "sport");
        assert_eq!(out[2].average_sentiment, None);
    }

    #[test]
    fn test_breakdown_of_nothing() {
        assert!(topic_breakdown(&[]).is_empty());
    }
}
