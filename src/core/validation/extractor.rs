//! Axum extractor for the `{ "data": ... }` request envelope

use crate::core::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

static MISSING: Value = Value::Null;

/// Request body parsed as JSON
///
/// An empty body reads as `{}` so that field checks report the missing field
/// instead of a parse error. Malformed JSON is rejected with 400.
///
/// ```rust,ignore
/// pub async fn create_dish(State(state): State<DishAppState>, body: Envelope) -> ApiResult<...> {
///     let data = body.data();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Envelope(pub Value);

impl Envelope {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope(Value::Object(Map::new())));
        }
        Ok(Envelope(serde_json::from_slice(bytes)?))
    }

    /// The `data` member, `Null` when absent
    pub fn data(&self) -> &Value {
        self.0.get("data").unwrap_or(&MISSING)
    }
}

impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid(format!("Invalid request body: {}", e)))?;

        Envelope::from_slice(&bytes)
    }
}
