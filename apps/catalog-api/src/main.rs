//! Catalog API - product catalog REST server backed by MySQL

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::MySqlProductRepository;
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Connecting to MySQL at {}:{}",
        config.mysql.host, config.mysql.port
    );

    // Database and table creation plus statement preparation happen here;
    // any failure aborts startup.
    let repository = MySqlProductRepository::connect(&config.mysql).await?;

    info!(
        "Connected to MySQL database: {}",
        config.mysql.database
    );

    let state = AppState { repository };

    // Build REST router
    let api_routes = api::routes(&state);
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    info!("Starting Catalog API on port {}", config.server.port);

    // Run server with graceful shutdown
    let repository = state.repository.clone();
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing MySQL pool");
        repository.close().await;
        info!("MySQL pool closed");
    })
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
