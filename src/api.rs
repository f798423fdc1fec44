// REST API with Axum
// Routes /accounts onto the AccountService.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::entities::Account;
use crate::error::AccountError;
use crate::repository::AccountRepository;
use crate::service::AccountService;

/// Shared application state
pub struct AppState<R: AccountRepository> {
    service: Arc<AccountService<R>>,
}

impl<R: AccountRepository> AppState<R> {
    pub fn new(service: AccountService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &AccountService<R> {
        &self.service
    }
}

impl<R: AccountRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Error body: `{"statusCode": 400, "message": "..."}`
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

/// Service failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(AccountError);

impl From<AccountError> for ApiError {
    fn from(error: AccountError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::NotFound => StatusCode::NOT_FOUND,
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> &'static str {
    "OK"
}

/// GET /accounts - Get all accounts
async fn list_accounts<R: AccountRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(state.service.get_all()?))
}

/// GET /accounts/:id - Get one account
async fn get_account<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let response = match state.service.get_by_id(id)? {
        Some(account) => (StatusCode::OK, Json(account)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// POST /accounts - Create an account
async fn create_account<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Json(account): Json<Account>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let created = state.service.create(account)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /accounts/:id - Replace name/document/phone of an account
async fn update_account<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(account): Json<Account>,
) -> Result<Response, ApiError> {
    let response = match state.service.update(id, account)? {
        Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// DELETE /accounts/:id - Delete an account
async fn delete_account<R: AccountRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id)?;
    Ok(StatusCode::OK)
}

/// Build the router with all endpoints
pub fn create_router<R: AccountRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/accounts",
            get(list_accounts::<R>).post(create_account::<R>),
        )
        .route(
            "/accounts/:id",
            get(get_account::<R>)
                .put(update_account::<R>)
                .delete(delete_account::<R>),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
