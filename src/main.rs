//! # Stockroom Main Entry Point
//!
//! Boots the stockroom service: configuration, logging, database pool,
//! migrations, seed data, then the HTTP server. The entry point owns every
//! service it constructs.

use migration::{Migrator, MigratorTrait};
use stockroom::{config::ConfigLoader, db, logging, seeds, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::new().load()?;

    logging::init_subscriber(&config);

    tracing::info!(profile = %config.profile, "loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "effective configuration");
    }

    let pool = db::init_pool(&config).await?;
    Migrator::up(&pool, None).await?;

    let state = server::build_state(config, pool.clone());
    seeds::seed_initial_data(
        &pool,
        &state.auth,
        &state.config.admin_default_password,
    )
    .await?;

    server::run_server(state).await
}
