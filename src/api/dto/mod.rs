//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod breakdown;
pub mod daily;
pub mod health;
pub mod pagination;
pub mod records;
pub mod summary;
pub mod window;
