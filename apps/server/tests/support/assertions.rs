use anyhow::Context as _;
use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
};
use serde_json::Value;

/// Assert status code matches expected
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Assert the wildcard CORS origin header is present
pub fn assert_any_origin(headers: &HeaderMap, context: &str) {
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*"),
        "{context}: expected Access-Control-Allow-Origin: *"
    );
}

/// Assert the CORS preflight headers
pub fn assert_preflight_headers(headers: &HeaderMap, context: &str) {
    assert_any_origin(headers, context);
    for (name, expected) in [
        (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        (header::ACCESS_CONTROL_MAX_AGE, "3600"),
    ] {
        assert_eq!(
            headers.get(&name).and_then(|v| v.to_str().ok()),
            Some(expected),
            "{context}: expected {name}: {expected}"
        );
    }
}

/// Assert a JSON success body and return it parsed
pub fn assert_json_body(headers: &HeaderMap, body: &Bytes) -> anyhow::Result<Value> {
    assert_eq!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json"),
        "expected Content-Type: application/json"
    );
    serde_json::from_slice(body).context("parse JSON response body")
}

/// Assert a plain-text error body and return it
pub fn assert_text_body(headers: &HeaderMap, body: &Bytes) -> anyhow::Result<String> {
    assert_eq!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8"),
        "expected plain-text error body"
    );
    String::from_utf8(body.to_vec()).context("error body is UTF-8")
}
