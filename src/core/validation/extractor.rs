//! Axum extractors whose rejections render as [`ApiError`]
//!
//! `JsonBody` does not insist on a `Content-Type` header and reads an empty
//! body as `{}`, so a missing body reaches the handler and fails its field
//! checks with a 400 instead of being rejected by the framework.
//! `PathParam` wraps axum's `Path` so undecodable segments get the uniform
//! error body too.

use crate::core::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A parsed JSON request body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_company(
///     State(state): State<CompanyAppState>,
///     body: JsonBody,
/// ) -> ApiResult<impl IntoResponse> {
///     let code = validators::required_str("code", body.get("code"))?;
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// Look up a top-level field; non-object bodies have no fields
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }
        Ok(Self(serde_json::from_slice(bytes)?))
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {}", e)))?;

        Self::parse(&bytes)
    }
}

/// A path parameter, rejected with a 400 `ApiError`
#[derive(Debug, Clone, PartialEq)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
