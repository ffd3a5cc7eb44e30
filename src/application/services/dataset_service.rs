//! Dataset loading with local-first, remote-fallback semantics.

use std::sync::Arc;

use crate::domain::entities::{Dataset, DatasetOrigin};
use crate::domain::errors::DatasetError;
use crate::domain::repositories::{DatasetSource, SourceError};
use crate::infrastructure::dataset::parse_dataset;

/// Loads the dataset once at startup.
///
/// The primary source is tried first. Only [`SourceError::NotFound`] on the
/// primary is recoverable: it triggers the fallback. Every other failure,
/// and any failure of the fallback, is returned to the caller.
pub struct DatasetService {
    primary: Arc<dyn DatasetSource>,
    fallback: Arc<dyn DatasetSource>,
}

impl DatasetService {
    pub fn new(primary: Arc<dyn DatasetSource>, fallback: Arc<dyn DatasetSource>) -> Self {
        Self { primary, fallback }
    }

    /// Fetches and parses the dataset.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::Source`] if the primary fails for a reason other than
    ///   absence, or if the fallback fails
    /// - [`DatasetError::MissingColumn`] / [`DatasetError::Csv`] from parsing
    pub async fn load(&self) -> Result<Dataset, DatasetError> {
        let (source, text) = match self.primary.fetch().await {
            Ok(text) => (&self.primary, text),
            Err(SourceError::NotFound(location)) => {
                tracing::warn!(
                    "Dataset not found at {location}, falling back to {}",
                    self.fallback.describe()
                );
                let text = self.fallback.fetch().await.inspect_err(|e| {
                    tracing::error!("Fallback dataset fetch failed: {e}");
                })?;
                (&self.fallback, text)
            }
            Err(e) => return Err(e.into()),
        };

        let origin = if source.is_remote() {
            DatasetOrigin::Remote(source.describe())
        } else {
            DatasetOrigin::LocalFile(source.describe())
        };

        parse_dataset(&text, origin)
    }
}
