//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS headers (billing API routes only)

pub mod cors;
pub mod request_id;

pub use cors::cors_headers_middleware;
pub use request_id::request_id_middleware;
