//! Source trait for raw CSV dataset text.

use async_trait::async_trait;

/// Errors that can occur while fetching the dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The dataset does not exist at this location. Recoverable by falling back.
    #[error("dataset not found at {0}")]
    NotFound(String),

    #[error("failed to read {location}: {message}")]
    Io { location: String, message: String },

    #[error("failed to fetch {location}: {message}")]
    Http { location: String, message: String },
}

/// Something that can produce the dataset as CSV text.
///
/// # Implementations
///
/// - [`crate::infrastructure::dataset::FileSource`] - Local file on disk
/// - [`crate::infrastructure::dataset::HttpSource`] - Remote URL over HTTP(S)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Returns the complete CSV document.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] when the dataset is absent, and
    /// [`SourceError::Io`] / [`SourceError::Http`] for any other failure.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable location, used in logs and the health check.
    fn describe(&self) -> String;

    /// True for sources reached over the network.
    fn is_remote(&self) -> bool;
}
