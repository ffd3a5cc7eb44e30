//! CSV text into a [`Dataset`].

use std::collections::HashMap;

use csv::StringRecord;

use crate::domain::entities::{Article, Dataset, DatasetOrigin};
use crate::domain::errors::DatasetError;

const SENTIMENT_COLUMN: &str = "sentiment_score";

/// Parses a CSV document with a header row.
///
/// Rows that the CSV reader cannot decode are skipped with a warning; short
/// rows are padded with empty cells. No other validation happens here:
/// unparseable dates surface later, in aggregation.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumn`] when one of
/// [`Dataset::REQUIRED_COLUMNS`] is absent, and [`DatasetError::Csv`] if the
/// header row itself cannot be read.
pub fn parse_dataset(text: &str, origin: DatasetOrigin) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    let [date_idx, topic_idx, city_idx, state_idx, country_idx] =
        resolve_required(&header_map)?;
    let sentiment_idx = header_map.get(SENTIMENT_COLUMN).copied();

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut articles = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                // +2: header is line 1, records are 1-based
                tracing::warn!(line = idx + 2, error = %e, "Skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };

        let cell = |i: usize| record.get(i).unwrap_or_default().to_string();

        let mut values: Vec<String> = record.iter().map(str::to_string).collect();
        values.resize(columns.len(), String::new());

        articles.push(Article {
            publication_date: cell(date_idx),
            topic: cell(topic_idx),
            city: cell(city_idx),
            state: cell(state_idx),
            country: cell(country_idx),
            sentiment_score: sentiment_idx.and_then(|i| parse_score(record.get(i))),
            values,
        });
    }

    tracing::info!(
        rows = articles.len(),
        skipped,
        columns = columns.len(),
        "Parsed dataset from {origin}"
    );

    Ok(Dataset {
        columns,
        articles,
        origin,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
        .collect()
}

fn resolve_required(header_map: &HashMap<String, usize>) -> Result<[usize; 5], DatasetError> {
    let mut out = [0usize; 5];
    for (slot, name) in out.iter_mut().zip(Dataset::REQUIRED_COLUMNS) {
        *slot = *header_map
            .get(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
    }
    Ok(out)
}

fn parse_score(raw: Option<&str>) -> Option<f64> {
    let v = raw?.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
title,publication_date,topic,city,state,country,sentiment_score
First,2024-01-01 09:00,tech,Austin,Texas,United States,0.4
Second,Unknown,sport,Unknown,Unknown,Unknown,
Third,2024-01-03 18:45,business,Paris,Unknown,France,-0.25
";

    #[test]
    fn test_parse_sample() {
        let ds = parse_dataset(SAMPLE, DatasetOrigin::Inline).unwrap();

        assert_eq!(ds.columns.len(), 7);
        assert_eq!(ds.len(), 3);

        let first = &ds.articles[0];
        assert_eq!(first.publication_date, "2024-01-01 09:00");
        assert_eq!(first.topic, "tech");
        assert_eq!(first.state, "Texas");
        assert_eq!(first.sentiment_score, Some(0.4));
        assert_eq!(first.values[0], "First");

        assert_eq!(ds.articles[1].sentiment_score, None);
        assert_eq!(ds.articles[2].sentiment_score, Some(-0.25));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let text = "publication_date,topic,city,state,country,extra\n2024-01-01,tech,Leeds\n";
        let ds = parse_dataset(text, DatasetOrigin::Inline).unwrap();

        let a = &ds.articles[0];
        assert_eq!(a.city, "Leeds");
        assert_eq!(a.state, "");
        assert_eq!(a.values.len(), 6);
    }

    #[test]
    fn test_missing_required_column() {
        let text = "publication_date,topic,city,state\n2024-01-01,tech,Leeds,Unknown\n";
        let err = parse_dataset(text, DatasetOrigin::Inline).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(c) if c == "country"));
    }

    #[test]
    fn test_headers_matched_case_insensitively() {
        let text = "Publication_Date,Topic,City,State,Country\n2024-01-01,tech,A,B,C\n";
        let ds = parse_dataset(text, DatasetOrigin::Inline).unwrap();
        assert_eq!(ds.articles[0].country, "C");
    }
}
