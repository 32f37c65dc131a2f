//! Portfolio handler (POST /process-portfolio)

use axum::response::Response;

use crate::{
    api::extractors::JsonBody, api::response::json_response, models::PortfolioRequest, Result,
};

/// Count the holdings and return `{"size": ...}`.
pub async fn process_portfolio(JsonBody(request): JsonBody<PortfolioRequest>) -> Result<Response> {
    let response = request.size();
    tracing::debug!(size = response.size, "Counted holdings");
    json_response(&response)
}
