//! Calculator handler (POST /calculator)

use axum::response::Response;

use crate::{api::extractors::JsonBody, api::response::json_response, models::SumRequest, Result};

/// Add `num1` and `num2` and return `{"result": ...}`.
pub async fn calculate(JsonBody(request): JsonBody<SumRequest>) -> Result<Response> {
    let response = request.sum();
    tracing::debug!(
        num1 = request.number1,
        num2 = request.number2,
        result = response.result,
        "Calculated sum"
    );
    json_response(&response)
}
