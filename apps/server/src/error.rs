//! Error types for the loadprobe endpoints

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Error parsing request: {0}")]
    Decode(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Error encoding response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Decode(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Error::Encode(source) => {
                tracing::error!(error = %source, "Error encoding response");
                "Internal Server Error".to_string()
            }
            _ => self.to_string(),
        };

        let mut response = (status, format!("{message}\n")).into_response();

        // Plain-text error bodies, never sniffed as anything else.
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );

        response
    }
}
