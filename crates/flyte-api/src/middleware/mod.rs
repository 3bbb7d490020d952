//! # Middleware
//!
//! - `tracing_layer`: request spans via `tower_http::trace::TraceLayer`.
//! - `metrics`: in-process request and error counters.

pub mod metrics;
pub mod tracing_layer;
