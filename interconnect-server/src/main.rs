use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use interconnect_server::cache::{CachedRoutes, CachedSchedules};
use interconnect_server::config::AppConfig;
use interconnect_server::planner::ConnectionAssembler;
use interconnect_server::routes::RoutesClient;
use interconnect_server::schedules::SchedulesClient;
use interconnect_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Upstream clients, each behind its own single-flight cache
    let cache_config = config.cache_config();
    let routes = RoutesClient::new(config.routes_client_config())?;
    let schedules = SchedulesClient::new(config.schedules_client_config())?;

    let planner = ConnectionAssembler::new(
        CachedRoutes::new(routes, &cache_config),
        CachedSchedules::new(schedules, &cache_config),
        &config.search_config(),
    );

    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        routes_api = %config.routes_api_url,
        schedules_api = %config.schedules_api_url,
        "Interconnection server listening"
    );
    info!("  GET /health                - Health check");
    info!("  GET /v1/interconnections   - Search direct and one-stop flights");

    axum::serve(listener, app).await?;
    Ok(())
}
