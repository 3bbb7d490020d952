//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The pack repository is injected here once, at construction. There is no
//! process-wide repository: tests build an [`AppState`] around whatever
//! [`PackRepository`] they need.

use std::sync::Arc;

use flyte_pack::{MemoryPackRepository, PackRepository};

use crate::middleware::metrics::ApiMetrics;

/// Output format of the process-wide log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Application configuration, read from the environment by the binary.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`PORT`).
    pub port: u16,
    /// PostgreSQL connection string (`DATABASE_URL`). If `None`, packs are
    /// kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections (`DATABASE_MAX_CONNECTIONS`).
    pub database_max_connections: u32,
    /// Log output format (`LOG_FORMAT=json` for JSON).
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Unparseable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("database_max_connections", &self.database_max_connections)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: None,
            database_max_connections: 10,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The pack store every handler operates on.
    pub packs: Arc<dyn PackRepository>,
    /// Request and error counters.
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}

impl AppState {
    /// Default configuration over an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(MemoryPackRepository::new()))
    }

    /// Default configuration over the given repository.
    pub fn with_repository(packs: Arc<dyn PackRepository>) -> Self {
        Self::with_config(AppConfig::default(), packs)
    }

    /// Explicit configuration and repository.
    pub fn with_config(config: AppConfig, packs: Arc<dyn PackRepository>) -> Self {
        Self {
            packs,
            metrics: ApiMetrics::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
