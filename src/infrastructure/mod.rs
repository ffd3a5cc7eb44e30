//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::repositories::DatasetSource`] trait for the
//! local file system and for HTTP, and parses the CSV format.
//!
//! # Modules
//!
//! - [`dataset`] - File/HTTP sources and the CSV reader

pub mod dataset;
