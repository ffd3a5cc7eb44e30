//! Dataset fetched over HTTP(S).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::{DatasetSource, SourceError};

/// Downloads the CSV from a fixed URL.
///
/// Transient failures are retried with exponential backoff; a 404 is
/// reported as [`SourceError::NotFound`] immediately.
pub struct HttpSource {
    url: String,
    client: Client,
    retries: usize,
}

impl HttpSource {
    /// Creates a source with a per-request timeout and a retry budget.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        retries: usize,
    ) -> Result<Self, SourceError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Http {
                location: url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            url,
            client,
            retries,
        })
    }

    async fn fetch_once(&self) -> Result<String, SourceError> {
        let http_err = |e: reqwest::Error| SourceError::Http {
            location: self.url.clone(),
            message: e.to_string(),
        };

        let response = self.client.get(&self.url).send().await.map_err(http_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(self.url.clone()));
        }

        response
            .error_for_status()
            .map_err(http_err)?
            .text()
            .await
            .map_err(http_err)
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        // 200ms, 400ms, 800ms, ...
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(self.retries);

        let mut attempt = 0u32;
        RetryIf::spawn(
            strategy,
            || {
                attempt += 1;
                let attempt = attempt;
                async move {
                    tracing::info!(url = %self.url, attempt, "Fetching remote dataset");
                    self.fetch_once().await.inspect_err(|e| {
                        tracing::warn!(url = %self.url, attempt, error = %e, "Remote dataset fetch failed");
                    })
                }
            },
            |e: &SourceError| !matches!(e, SourceError::NotFound(_)),
        )
        .await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    fn is_remote(&self) -> bool {
        true
    }
}
