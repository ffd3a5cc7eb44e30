//! HTTP server initialization and runtime setup.
//!
//! Loads the dataset, computes the dashboard views and runs the Axum server.

use crate::application::services::{DashboardService, DatasetService};
use crate::config::Config;
use crate::domain::repositories::DatasetSource;
use crate::infrastructure::dataset::{FileSource, HttpSource};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Loads the dataset and computes the dashboard views.
///
/// # Errors
///
/// Returns an error if:
/// - Neither the local file nor the remote URL yields a dataset
/// - The dataset is missing a required column
/// - No article has a usable publication date
pub async fn load_dashboard(config: &Config) -> Result<DashboardService> {
    let local: Arc<dyn DatasetSource> = Arc::new(FileSource::new(&config.dataset_path));
    let remote: Arc<dyn DatasetSource> = Arc::new(
        HttpSource::new(
            &config.dataset_url,
            config.fetch_timeout(),
            config.fetch_retries,
        )
        .context("Failed to build HTTP client")?,
    );

    let dataset = DatasetService::new(local, remote)
        .load()
        .await
        .context("Failed to load dataset")?;

    DashboardService::new(dataset).context("Failed to aggregate dataset")
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The dataset cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let dashboard = load_dashboard(&config).await?;
    let state = AppState::new(Arc::new(dashboard)).context("Failed to open date window")?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
