//! Method handling shared by every endpoint: CORS preflight and 405.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::Error;

const PREFLIGHT_MAX_AGE_SECS: &str = "3600";

/// Answer a CORS preflight (OPTIONS) with 204 and no body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
            (
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
            ),
        ],
    )
}

/// Fallback for any method other than POST and OPTIONS.
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
