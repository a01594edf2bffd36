//! Products API - REST server

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::PgProductRepository;
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
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { db };

    let api_routes = api::routes(PgProductRepository::new(state.db.clone()));
    let app = create_router::<openapi::ApiDoc>(api_routes, &config.cors)?
        .merge(health_router(config.app))
        .merge(api::health::router(state.clone()));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        close_postgres(state.db, "main"),
    )
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
