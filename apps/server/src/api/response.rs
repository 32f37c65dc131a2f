//! JSON response encoding

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{Error, Result};

/// Encode `value` as a 200 `application/json` response.
///
/// Serialization happens before any header is committed, so a failure
/// still produces a clean 500.
pub fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value).map_err(Error::Encode)?;
    Ok((
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
