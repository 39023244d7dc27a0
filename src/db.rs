//! Database pool management for the stockroom service.
//!
//! Builds the SeaORM connection pool from [`AppConfig`] and offers a trivial
//! liveness probe.

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::AppConfig;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {source}")]
    ConnectionFailed {
        #[from]
        source: sea_orm::DbErr,
    },
    #[error("invalid database configuration: {message}")]
    InvalidConfiguration { message: String },
}

const CONNECT_ATTEMPTS: u32 = 5;

/// Opens the connection pool described by `cfg`.
///
/// Connect failures are retried with exponential backoff; the final attempt's
/// error is returned when all of them fail.
pub async fn init_pool(cfg: &AppConfig) -> Result<DatabaseConnection> {
    if cfg.database_url.is_empty() {
        return Err(DatabaseError::InvalidConfiguration {
            message: "database URL cannot be empty".to_string(),
        }
        .into());
    }

    let mut options = ConnectOptions::new(&cfg.database_url);
    options
        .max_connections(cfg.db_max_connections)
        .acquire_timeout(Duration::from_millis(cfg.db_acquire_timeout_ms))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let mut backoff = Duration::from_millis(100);
    let mut attempt = 1;

    loop {
        match Database::connect(options.clone()).await {
            Ok(pool) => {
                log::info!("connected to database (attempt {attempt})");
                return Ok(pool);
            }
            Err(err) if attempt < CONNECT_ATTEMPTS => {
                log::warn!("connect attempt {attempt} failed: {err}, retrying in {backoff:?}");
                sleep(backoff).await;
                backoff *= 2;
                attempt += 1;
            }
            Err(err) => {
                log::error!("giving up on database after {CONNECT_ATTEMPTS} attempts: {err}");
                return Err(DatabaseError::ConnectionFailed { source: err }.into());
            }
        }
    }
}

/// Confirms the pool can still answer a trivial query.
pub async fn health_check(db: &DatabaseConnection) -> Result<()> {
    let probe = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    db.query_one(probe)
        .await
        .context("database health check failed")?;
    Ok(())
}
