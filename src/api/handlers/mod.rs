//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod breakdown;
pub mod daily;
pub mod health;
pub mod records;
pub mod summary;
pub mod window;

pub use breakdown::{countries_handler, states_handler, topics_handler};
pub use daily::daily_handler;
pub use health::health_handler;
pub use records::records_handler;
pub use summary::summary_handler;
pub use window::{
    get_window_handler, patch_window_handler, preview_window_handler, reset_window_handler,
};
