//! Endpoint routes
//!
//! Each endpoint accepts POST, answers OPTIONS preflights, and rejects every
//! other method with 405. Paths are served with and without a trailing slash.

use crate::api::handlers::{calculator, portfolio, preflight};
use axum::{
    handler::Handler,
    routing::{post, MethodRouter},
    Router,
};

pub fn endpoint_routes() -> Router {
    Router::new()
        .route("/calculator", post_endpoint(calculator::calculate))
        .route("/calculator/", post_endpoint(calculator::calculate))
        .route(
            "/process-portfolio",
            post_endpoint(portfolio::process_portfolio),
        )
        .route(
            "/process-portfolio/",
            post_endpoint(portfolio::process_portfolio),
        )
}

fn post_endpoint<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    post(handler)
        .options(preflight::preflight)
        .fallback(preflight::method_not_allowed)
}
