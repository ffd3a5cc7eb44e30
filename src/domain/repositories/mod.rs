//! Data access trait definitions for the domain layer.
//!
//! - [`DatasetSource`] - Where the CSV dataset comes from
//!
//! Implementations live in `crate::infrastructure::dataset`; mock
//! implementations are generated via `mockall` for testing.

pub mod dataset_source;

pub use dataset_source::{DatasetSource, SourceError};

#[cfg(test)]
pub use dataset_source::MockDatasetSource;
