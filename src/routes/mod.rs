//! HTTP route handlers.
//!
//! The service exposes a single liveness route. Responses from it carry
//! `Cache-Control: no-store`, and every request, routed or not, passes through
//! the request ID middleware so its logs can be correlated.

pub mod health;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        Uri,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Fallback for any path without a route.
async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with the health route and middleware.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
