//! HTML template rendering handlers for the web dashboard.

mod dashboard;

pub use dashboard::dashboard_handler;
