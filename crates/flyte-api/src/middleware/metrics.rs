//! # Request Metrics
//!
//! In-process request counters, split by response class. Not-found answers
//! are routine for this API, so client errors are counted apart from server
//! errors rather than folded into one error total.
//!
//! The counters live in [`crate::state::AppState`] and reach the middleware
//! as a request extension.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    client_errors: AtomicU64,
    server_errors: AtomicU64,
}

/// Shared metrics state. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    counters: Arc<Counters>,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests answered so far.
    pub fn requests(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    /// Responses with a 4xx status.
    pub fn client_errors(&self) -> u64 {
        self.counters.client_errors.load(Ordering::Relaxed)
    }

    /// Responses with a 5xx status.
    pub fn server_errors(&self) -> u64 {
        self.counters.server_errors.load(Ordering::Relaxed)
    }

    fn record(&self, response: &Response) {
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        let status = response.status();
        if status.is_client_error() {
            self.counters.client_errors.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            self.counters.server_errors.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Middleware that records every response in the request's [`ApiMetrics`].
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.record(&response);
    }

    response
}
