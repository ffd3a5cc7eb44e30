//! Article entity and the loaded dataset.

/// Placeholder used by the dataset when a field's true value is absent.
pub const UNKNOWN: &str = "Unknown";

/// A single news article as read from one CSV row.
///
/// Fields needed by the dashboard are typed; `values` keeps every cell in
/// column order so the raw table can be rendered without re-reading the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub publication_date: String,
    pub topic: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub sentiment_score: Option<f64>,
    pub values: Vec<String>,
}

impl Article {
    /// Builds an article with only the dashboard fields set.
    ///
    /// `values` mirrors the five fields in the order of [`Dataset::REQUIRED_COLUMNS`].
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let article = Article::new("2024-01-01 09:30", "tech", "Austin", "Texas", "United States");
    /// assert!(article.has_known_location());
    /// ```
    pub fn new(
        publication_date: impl Into<String>,
        topic: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let publication_date = publication_date.into();
        let topic = topic.into();
        let city = city.into();
        let state = state.into();
        let country = country.into();
        let values = vec![
            publication_date.clone(),
            topic.clone(),
            city.clone(),
            state.clone(),
            country.clone(),
        ];

        Self {
            publication_date,
            topic,
            city,
            state,
            country,
            sentiment_score: None,
            values,
        }
    }

    pub fn with_sentiment(mut self, score: f64) -> Self {
        self.sentiment_score = Some(score);
        self
    }

    pub fn has_known_date(&self) -> bool {
        is_known(&self.publication_date)
    }

    pub fn has_known_city(&self) -> bool {
        is_known(&self.city)
    }

    pub fn has_known_state(&self) -> bool {
        is_known(&self.state)
    }

    pub fn has_known_country(&self) -> bool {
        is_known(&self.country)
    }

    /// True when at least one of city, state or country is known.
    pub fn has_known_location(&self) -> bool {
        self.has_known_city() || self.has_known_state() || self.has_known_country()
    }
}

/// Returns false only for the exact `"Unknown"` sentinel.
pub fn is_known(value: &str) -> bool {
    value != UNKNOWN
}

/// Where a dataset was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    LocalFile(String),
    Remote(String),
    /// Built in memory (tests, fixtures).
    Inline,
}

impl std::fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalFile(path) => write!(f, "local file {path}"),
            Self::Remote(url) => write!(f, "remote {url}"),
            Self::Inline => write!(f, "inline data"),
        }
    }
}

/// The full record set, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub articles: Vec<Article>,
    pub origin: DatasetOrigin,
}

impl Dataset {
    /// Columns the dashboard cannot work without.
    pub const REQUIRED_COLUMNS: [&'static str; 5] =
        ["publication_date", "topic", "city", "state", "country"];

    /// Wraps articles built in code, using the required columns as the header.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        Self {
            columns: Self::REQUIRED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            articles,
            origin: DatasetOrigin::Inline,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
