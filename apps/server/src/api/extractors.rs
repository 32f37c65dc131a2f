//! Custom Axum extractors for endpoint request bodies.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::Error;

/// JSON body extractor that reports every failure as a plain-text 400.
///
/// Unlike `axum::Json` it does not require a `Content-Type` header. Only the
/// first JSON value in the body is read; anything after it is ignored. That
/// value must be an object or `null` (treated as `{}`), since serde would
/// otherwise bind positional arrays to structs.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                Error::PayloadTooLarge
            } else {
                Error::Decode(e.body_text())
            }
        })?;

        decode(&bytes).map(JsonBody)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    let value = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<JsonValue>()
        .next()
        .ok_or_else(|| Error::Decode("EOF while parsing a value".to_string()))??;
    let value = match value {
        JsonValue::Null => JsonValue::Object(Default::default()),
        value => value,
    };
    if !value.is_object() {
        return Err(Error::Decode(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PortfolioRequest, SumRequest};

    #[test]
    fn test_decode_object() {
        let req: SumRequest = decode(br#"{"num1": 1, "num2": 2, "extra": true}"#).unwrap();
        assert_eq!(req.sum().result, 3.0);
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        let err = decode::<SumRequest>(b"[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error parsing request: expected a JSON object, found an array"
        );
        assert!(decode::<PortfolioRequest>(b"\"AAPL\"").is_err());
    }

    #[test]
    fn test_decode_null_body_as_empty_object() {
        let req: SumRequest = decode(b"null").unwrap();
        assert_eq!(req.sum().result, 0.0);
        let req: PortfolioRequest = decode(b" null ").unwrap();
        assert_eq!(req.size().size, 0);
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let req: SumRequest = decode(br#"{"num1":1,"num2":2} trailing"#).unwrap();
        assert_eq!(req.sum().result, 3.0);
        let req: PortfolioRequest = decode(br#"{"holdings":["A"]}{"holdings":[]}"#).unwrap();
        assert_eq!(req.size().size, 1);
    }

    #[test]
    fn test_decode_malformed_and_empty() {
        assert!(matches!(
            decode::<SumRequest>(b"not json"),
            Err(Error::Decode(msg)) if !msg.is_empty()
        ));
        assert!(matches!(decode::<SumRequest>(b""), Err(Error::Decode(_))));
        assert!(matches!(decode::<SumRequest>(b"  \n"), Err(Error::Decode(_))));
    }
}
