//! # flyte-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the pack API. Configuration comes from
//! the environment; see [`flyte_api::state::AppConfig`].

use std::sync::Arc;

use flyte_api::db::packs::PgPackRepository;
use flyte_api::state::{AppConfig, AppState, LogFormat};
use flyte_pack::{MemoryPackRepository, PackRepository};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    init_tracing(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    // Postgres when configured, otherwise in-memory.
    let pool = flyte_api::db::init_pool(&config).await.map_err(|e| {
        tracing::error!("Database initialization failed: {e}");
        e
    })?;
    let packs: Arc<dyn PackRepository> = match pool {
        Some(pool) => Arc::new(PgPackRepository::new(pool)),
        None => Arc::new(MemoryPackRepository::new()),
    };

    let port = config.port;
    let app = flyte_api::app(AppState::with_config(config, packs));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Flyte API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
