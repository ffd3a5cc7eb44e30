use std::sync::{Arc, Mutex};

use crate::application::services::{DashboardService, TracingObserver, WindowSession};
use crate::domain::errors::WindowError;

/// Shared application state injected into every handler.
///
/// There is one logical session: the window lives behind a mutex and every
/// handler holds the lock only for the synchronous recompute.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService>,
    pub session: Arc<Mutex<WindowSession>>,
}

impl AppState {
    /// Opens the window session and wires the logging observer.
    ///
    /// # Errors
    ///
    /// Propagates [`WindowError`] if the series cannot back a session.
    pub fn new(dashboard: Arc<DashboardService>) -> Result<Self, WindowError> {
        let mut session = dashboard.open_session()?;
        session.subscribe(Box::new(TracingObserver));

        Ok(Self {
            dashboard,
            session: Arc::new(Mutex::new(session)),
        })
    }
}
