//! JSON body extractors.
//!
//! A body that is missing, not JSON, not an object, or sent without a JSON
//! content type is reported as "No input data provided".

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Message returned whenever a request carries no usable JSON object.
pub const NO_INPUT_MESSAGE: &str = "No input data provided";

/// Message returned when a field has the wrong JSON type.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// A JSON object body deserialized into `T`. An empty object is accepted.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

/// A JSON object body deserialized into `T`. An empty object is rejected.
#[derive(Debug, Clone)]
pub struct RequiredJsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = object_body(req, state).await?;
        decode(value).map(JsonBody)
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for RequiredJsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = object_body(req, state).await?;
        if value.as_object().map_or(true, |fields| fields.is_empty()) {
            return Err(no_input());
        }
        decode(value).map(RequiredJsonBody)
    }
}

async fn object_body<S>(req: Request, state: &S) -> Result<Value, ApiError>
where
    S: Send + Sync,
{
    let Json(value) = Json::<Value>::from_request(req, state)
        .await
        .map_err(|rejection: JsonRejection| {
            tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
            no_input()
        })?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(no_input())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(reason = %e, "Request body did not match the expected shape");
        ApiError::Validation(INVALID_INPUT_MESSAGE.to_string())
    })
}

fn no_input() -> ApiError {
    ApiError::Validation(NO_INPUT_MESSAGE.to_string())
}
