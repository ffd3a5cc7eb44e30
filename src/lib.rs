//! # News Dashboard
//!
//! An interactive dashboard over a CSV dataset of news articles, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Articles, the daily series and the pure views over them
//! - **Application Layer** ([`application`]) - Dataset loading, precomputed views, the window session
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV parsing and dataset sources (file, HTTP)
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered dashboard page
//!
//! ## Features
//!
//! - Daily publication counts with zero-filled gaps
//! - Date window with total, minimum, maximum and average panes
//! - Summary table, topic breakdown, per-state and per-country counts
//! - Local dataset with a remote fallback
//!
//! ## Quick Start
//!
//! ```bash
//! export DATASET_PATH="extended_dataset.csv"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DashboardService, DatasetService, WindowSession};
    pub use crate::domain::entities::{Article, DailyCount, DailySeries, Dataset, DateWindow};
    pub use crate::error::AppError;
    pub use crate::infrastructure::dataset::parse_dataset;
    pub use crate::state::AppState;
}
