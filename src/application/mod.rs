//! Application layer.
//!
//! # Available Services
//!
//! - [`services::DatasetService`] - Local-first dataset loading with remote fallback
//! - [`services::DashboardService`] - Static views computed once from the dataset
//! - [`services::WindowSession`] - The interactive date window and its derived view

pub mod services;
