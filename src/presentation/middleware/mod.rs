//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod request_id;

pub use cors::create_cors_layer;
pub use logging::create_trace_layer;
pub use metrics::metrics_middleware;
pub use request_id::{request_id_middleware, X_REQUEST_ID};
