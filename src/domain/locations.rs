//! Article counts per US state and per country.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{Article, UNKNOWN};

/// Country name assigned to every article located in a US state.
pub const USA: &str = "United States of America";

/// US state names as used by the state boundaries map.
pub const US_STATES: [&str; 52] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    "Puerto Rico",
];

/// Number of articles attributed to one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceCount {
    pub name: String,
    pub count: usize,
}

/// Capitalizes the first letter of every alphabetic run, lowercasing the rest.
///
/// `"new york"` and `"NEW YORK"` both become `"New York"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Canonical US state name for `value`, compared without regard to case.
pub fn us_state(value: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(value.trim()))
}

/// Counts articles per US state.
///
/// Only articles with some known location are considered; states outside
/// [`US_STATES`] are dropped.
pub fn state_counts(articles: &[Article]) -> Vec<PlaceCount> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();

    for article in articles.iter().filter(|a| a.has_known_location()) {
        if let Some(state) = us_state(&article.state) {
            *counts.entry(state).or_default() += 1;
        }
    }

    into_sorted(counts.into_iter().map(|(k, v)| (k.to_string(), v)))
}

/// Counts articles per country.
///
/// Articles located in a US state count toward [`USA`] whatever their
/// country cell says; articles with an unrecognised state are dropped, as
/// are those whose country is unknown.
pub fn country_counts(articles: &[Article]) -> Vec<PlaceCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for article in articles.iter().filter(|a| a.has_known_location()) {
        let state = title_case(&article.state);
        let country = if state == UNKNOWN {
            title_case(&article.country)
        } else if us_state(&state).is_some() {
            USA.to_string()
        } else {
            continue;
        };

        if country == UNKNOWN || country.is_empty() {
            continue;
        }

        let country = if country.eq_ignore_ascii_case(USA) {
            USA.to_string()
        } else {
            country
        };
        *counts.entry(country).or_default() += 1;
    }

    into_sorted(counts)
}

fn into_sorted(counts: impl IntoIterator<Item = (String, usize)>) -> Vec<PlaceCount> {
    let mut out: Vec<PlaceCount> = counts
        .into_iter()
        .map(|(name, count)| PlaceCount { name, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}
