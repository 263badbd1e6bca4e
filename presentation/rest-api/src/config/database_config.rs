use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;
use std::time::Duration;

use super::env_or;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: wait for a free connection (default: 30)
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let config = DatabaseConfig::new(db_url)
        .with_max_connections(env_or("DATABASE_MAX_CONNECTIONS", 5))
        .with_acquire_timeout(Duration::from_secs(env_or(
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            30,
        )));

    let pool = create_postgres_pool(&config)
        .await
        .context("could not connect to the products database")?;
    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
