//! Application services orchestrating loading and the dashboard views.

pub mod dashboard_service;
pub mod dataset_service;
pub mod window_session;

pub use dashboard_service::{DashboardService, RecordPage};
pub use dataset_service::DatasetService;
pub use window_session::{
    TracingObserver, WindowObserver, WindowSession, WindowState, WindowUpdate,
};
