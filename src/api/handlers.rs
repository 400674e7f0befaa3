use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::{error::ApiError, extractors::JsonBody, AppState};
use crate::service::{DeleteOutcome, UpdateOutcome};
use crate::validation;

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /accounts/{id} - Get account by id
pub async fn get_account_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::parse_path_id(&id)?;

    match state.service.get(id)? {
        Some(account) => Ok((StatusCode::OK, Json(account)).into_response()),
        None => state.missing(id),
    }
}

/// GET /accounts/ - List every account
pub async fn get_all_accounts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let accounts = state.service.list()?;
    Ok((StatusCode::OK, Json(accounts)).into_response())
}

/// PUT /accounts/ - Replace name and balance of an existing account
pub async fn update_account(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, ApiError> {
    let update = validation::validate_update(&body)?;
    let id = update.id;

    match state.service.update(update)? {
        UpdateOutcome::Updated(_) => Ok(StatusCode::OK.into_response()),
        UpdateOutcome::Missing => state.missing(id),
    }
}

/// DELETE /accounts/{id} - Delete account by id
pub async fn delete_account_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validation::parse_path_id(&id)?;

    match state.service.delete(id)? {
        DeleteOutcome::Deleted => Ok(StatusCode::OK.into_response()),
        DeleteOutcome::Missing => state.missing(id),
    }
}
