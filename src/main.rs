// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::employee_repository::EmployeeRepository;
use crate::application::headcount_service::HeadcountService;
use crate::domain::employee::Dataset;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::synthetic_repository::SyntheticEmployeeRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Load the dataset once; it is shared read-only for the life of the process
    let repository = SyntheticEmployeeRepository::new(config.dataset.size, config.dataset.seed);
    let dataset = Arc::new(Dataset::new(repository.load_employees().await?));
    if dataset.is_empty() {
        tracing::warn!("Dataset is empty; every chart will render without data");
    }
    tracing::info!(employees = dataset.len(), "Dataset loaded");

    // Create services (application layer)
    let dashboard_service = DashboardService::new(
        dataset,
        config.charts.histogram_bins,
        config.table.page_size,
    );
    let headcount_service = HeadcountService::new();

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        headcount_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Starting hr-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
