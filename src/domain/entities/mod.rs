//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Article`] / [`Dataset`] - Raw records as loaded from CSV
//! - [`DailyCount`] / [`DailySeries`] - Gap-filled per-day publication counts
//! - [`DateWindow`] - The active `[start, end]` filter
//! - [`Topic`] - The five tracked topic categories

pub mod article;
pub mod daily_count;
pub mod topic;
pub mod window;

pub use article::{Article, Dataset, DatasetOrigin, UNKNOWN, is_known};
pub use daily_count::{DailyCount, DailySeries};
pub use topic::Topic;
pub use window::DateWindow;
