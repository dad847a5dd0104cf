// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_view::DashboardView;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::stats_client::HttpStatsSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create stats source (infrastructure layer)
    let source = Arc::new(HttpStatsSource::new(
        config.backend.base_url.clone(),
        config.client.timeout(),
    )?);

    // Create service and view (application layer)
    let service = DashboardService::new(source);
    let view = Arc::new(DashboardView::new(service));
    view.mount();

    // Build router (presentation layer)
    let app = router(AppState { view }).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        %addr,
        backend = %config.backend.base_url,
        "Starting stats-dashboard"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
