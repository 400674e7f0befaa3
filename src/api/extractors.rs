use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::api::error::ApiError;

/// Raw JSON request body.
///
/// Field-level checks happen in `validation`, so this only rejects
/// bodies that are not JSON at all.
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        Ok(JsonBody(value))
    }
}
