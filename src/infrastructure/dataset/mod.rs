//! Dataset sources and CSV parsing.
//!
//! - [`FileSource`] - Local CSV file
//! - [`HttpSource`] - Remote CSV with retry
//! - [`parse_dataset`] - CSV text into a [`crate::domain::entities::Dataset`]

mod csv_reader;
mod file_source;
mod http_source;

pub use csv_reader::parse_dataset;
pub use file_source::FileSource;
pub use http_source::HttpSource;
