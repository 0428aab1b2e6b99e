use std::process::ExitCode;

use tracing::{error, info};

use fuel_server::config::ServerConfig;
use fuel_server::registry::{Registry, SeedError, load_seed_file};
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    fuel_server::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let registry = match build_registry(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("failed to load stations: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Loaded {} stations", registry.len().await);

    // Build app state and router
    let state = AppState::new(registry);
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {e}", config.addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Fuel Station Monitor listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /api/stations                - All stations");
    info!("  GET  /api/levels/region/:region   - Stations in a region");
    info!("  GET  /api/levels/station/:id      - A single station");
    info!("  POST /api/prices/region/:region   - Set prices for a region");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build the registry from the configured seed file, or the built-in stations.
fn build_registry(config: &ServerConfig) -> Result<Registry, SeedError> {
    match &config.seed_file {
        Some(path) => {
            info!("Loading stations from {}", path.display());
            Registry::new(load_seed_file(path)?)
        }
        None => Registry::with_default_seed(),
    }
}
