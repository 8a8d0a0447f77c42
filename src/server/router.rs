//! Axum router construction.

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers;

/// Per-request timeout. Display units poll on a 30 s interval, so a request
/// still in flight after that long is worthless to the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the application [`Router`] with the feed route and middleware attached.
///
/// Unknown paths and unsupported methods get axum's default 404/405 responses.
pub fn build() -> Router {
    Router::new()
        .route("/api/test", get(handlers::counter_values))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
}
