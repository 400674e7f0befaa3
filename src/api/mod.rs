// HTTP surface - axum router over the account facade

pub mod error;
pub mod extractors;
pub mod handlers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::NotFoundPolicy;
use crate::service::AccountService;
use error::ApiError;
use handlers::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: AccountService,
    pub not_found_policy: NotFoundPolicy,
}

impl AppState {
    pub fn new(service: AccountService, not_found_policy: NotFoundPolicy) -> Self {
        AppState {
            service,
            not_found_policy,
        }
    }

    /// Answer for an absent id, according to the configured policy
    pub fn missing(&self, id: i64) -> Result<Response, ApiError> {
        match self.not_found_policy {
            NotFoundPolicy::NotFound => Err(ApiError::not_found(format!("Account {}", id))),
            NotFoundPolicy::EmptyOk => Ok(StatusCode::OK.into_response()),
        }
    }
}

/// Build the full router: canonical routes, legacy aliases and health check
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Canonical routes
        .route("/accounts", get(get_all_accounts).put(update_account))
        .route("/accounts/", get(get_all_accounts).put(update_account))
        .route(
            "/accounts/:id",
            get(get_account_by_id).delete(delete_account_by_id),
        )
        // Legacy aliases
        .route("/getAccountById/:id", get(get_account_by_id))
        .route("/getAllAccounts/", get(get_all_accounts))
        .route("/updateAccountById/", axum::routing::put(update_account))
        .route("/deleteAccountById/:id", axum::routing::delete(delete_account_by_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
