//! Domain layer: entities and the pure transforms behind every view.
//!
//! # Architecture
//!
//! - [`entities`] - Articles, the daily series, the date window
//! - [`repositories`] - Dataset source trait
//! - [`aggregation`] - Raw articles into a gap-filled daily series
//! - [`window_view`] - Range filtering and window statistics
//! - [`summary`] - Dataset-wide completeness and topic counts
//! - [`topics`] - Per-topic share and mean sentiment
//! - [`locations`] - Counts per US state and per country
//!
//! Nothing here performs I/O. Loading lives in [`crate::infrastructure`],
//! orchestration in [`crate::application::services`].

pub mod aggregation;
pub mod entities;
pub mod errors;
pub mod locations;
pub mod repositories;
pub mod summary;
pub mod topics;
pub mod window_view;

pub use errors::{DatasetError, WindowError};
