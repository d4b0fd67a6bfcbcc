use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, DatabaseConfig};

/// Errors from pool setup and maintenance queries
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the shared connection pool from configuration.
///
/// The pool is created once at startup and handed to handlers through
/// application state; nothing else in the crate opens connections.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let connection_url = config.connection_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&connection_url)
        .await?;

    info!("Created database pool for: {}", config.name);
    Ok(pool)
}

/// Apply pending schema migrations from ./migrations
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
