//! Body extractor that always yields a JSON value.

use crate::errors::{AppError, messages};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

/// JSON body extractor that does not require a `Content-Type` header.
///
/// An empty or whitespace-only body becomes `{}` so field-level rules can
/// report what is missing. A body that is present but not JSON is rejected
/// with `400 INVALID_JSON`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientJson;
///
/// async fn echo(LenientJson(body): LenientJson) -> String {
///     body.to_string()
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl LenientJson {
    /// Parses raw bytes using the same rules as the extractor.
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        serde_json::from_slice(bytes).map(Self).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::BadRequest(messages::INVALID_JSON.to_string())
        })
    }
}

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Self::parse(&bytes).map_err(IntoResponse::into_response)
    }
}
