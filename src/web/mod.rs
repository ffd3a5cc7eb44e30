//! Web dashboard layer for browser-based UI.
//!
//! Renders the tabbed dashboard page with Askama. The date controls talk to
//! the JSON API from `static/dashboard.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
