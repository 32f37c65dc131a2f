//! API layer - routes, handlers, and middleware

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(config: &ServerConfig) -> Router {
    let endpoints = routes::endpoints::endpoint_routes().layer(middleware::allow_any_origin());

    Router::new()
        .route("/health", get(health_check))
        .merge(endpoints)
        // Middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "loadprobe"
    }))
}
