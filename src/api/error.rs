use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::validation::FieldViolation;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(Vec<FieldViolation>),
    NotFound(String),
    InternalError(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Validation(violations) => violations
                .iter()
                .map(|v| v.token.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::InternalError(msg) => msg.clone(),
        }
    }
}

impl From<Vec<FieldViolation>> for ApiError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations)
    }
}

/// Store failures are logged here and surface as a bare 500
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("account store failure: {:#}", err);
        ApiError::internal_error("Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.message();
        let violations = match self {
            ApiError::Validation(violations) => violations,
            _ => Vec::new(),
        };

        (status, Json(ErrorBody { error, violations })).into_response()
    }
}
