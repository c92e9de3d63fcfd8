// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_store::DashboardStore;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::memory_store::InMemoryDashboardStore;
use crate::infrastructure::uuid_generator::UuidGenerator;
use crate::presentation::app_state::AppState;
use crate::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_app_config()?;

    // Create store (infrastructure layer)
    let store: Arc<dyn DashboardStore> = match &config.store.snapshot_path {
        Some(path) => Arc::new(InMemoryDashboardStore::open(path).await?),
        None => Arc::new(InMemoryDashboardStore::new()),
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(store, Arc::new(UuidGenerator));

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting dashboard-cells service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
