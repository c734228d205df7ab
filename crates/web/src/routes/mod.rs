//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Billing (CORS-enabled, any method; OPTIONS is a preflight)
//! POST /api/billing/portal     - Create a billing portal session
//!
//! # Partials (HTMX fragments)
//! GET  /partials/sidebar       - Navigation sidebar for ?path=<current route>
//! ```

pub mod billing;
pub mod partials;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{cors_headers_middleware, request_id_middleware};
use crate::state::AppState;

/// Create the billing API router.
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/portal", any(billing::portal_session))
        .layer(axum::middleware::from_fn(cors_headers_middleware))
}

/// Create the HTML fragment router.
pub fn partial_routes() -> Router<AppState> {
    Router::new().route("/sidebar", get(partials::sidebar_fragment))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/billing", billing_routes())
        .nest("/partials", partial_routes())
}

/// Build the application with request tracing and request IDs.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        #[allow(clippy::cast_possible_truncation)] // Latency never exceeds u64 millis
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check upstreams.
async fn health() -> &'static str {
    "ok"
}
