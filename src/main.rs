// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::sample_repository::SampleWorkflowRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_json, dashboard_page, health_check, stream_dashboard};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;
    let addr = config.server.socket_addr()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SampleWorkflowRepository::new());

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository, config.page.title.clone());
    let streaming_service =
        StreamingDashboardService::new(dashboard_service.clone(), config.stream.channel_capacity);

    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
    });

    // Build router (presentation layer)
    // Compression is handled in the response builders, so no CompressionLayer here
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(dashboard_json))
        .route("/api/dashboard/stream", get(stream_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Starting quote-dashboard on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
