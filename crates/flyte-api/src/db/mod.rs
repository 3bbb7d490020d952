//! # Database Persistence Layer
//!
//! Provides Postgres persistence for packs via SQLx.
//!
//! The database layer is **optional**. When `DATABASE_URL` is set, packs are
//! stored in PostgreSQL through [`packs::PgPackRepository`]. When absent, the
//! API runs over the in-memory repository from `flyte-pack` (suitable for
//! development and testing).

pub mod packs;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::state::AppConfig;

/// Failures of the PostgreSQL layer.
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection, query or migration failure.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration failure at startup.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A pack could not be encoded to, or decoded from, its stored document.
    #[error("invalid pack document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Initialize the database connection pool and run migrations.
///
/// Returns `None` if no database URL is configured (in-memory-only mode).
/// Returns `Err` if the URL is set but the connection or migration fails.
pub async fn init_pool(config: &AppConfig) -> Result<Option<PgPool>, DbError> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!(
            "DATABASE_URL not set: running in-memory only mode. \
             Packs will not survive restarts."
        );
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Some(pool))
}
