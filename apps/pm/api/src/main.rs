use axum_helpers::server::{create_production_app, health_router};
use core_config::{
    load_dotenv,
    tracing::{init_tracing, install_color_eyre},
};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    load_dotenv();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;

    // - /healthcheck and /info: liveness and app metadata
    // - /ready: readiness with a database round-trip
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        "Starting API with graceful shutdown (30s timeout)"
    );

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}
