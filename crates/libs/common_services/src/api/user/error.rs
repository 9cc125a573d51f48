use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid current password")]
    InvalidPassword,

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(error: &UserError) {
    match error {
        UserError::BadRequest(message) => warn!("User -> Bad Request: {}", message),
        UserError::NotFound(message) => warn!("User -> Not found: {}", message),
        UserError::Conflict(message) => info!("User -> Conflict: {}", message),
        UserError::InvalidPassword => info!("User -> Password change with wrong current password"),
        UserError::Database(e) => error!("User -> Database query failed: {}", e),
        UserError::Internal(e) => error!("User -> Internal error: {:?}", e),
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Conflict(message) => (StatusCode::CONFLICT, message),
            Self::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                "Invalid current password".to_owned(),
            ),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_owned(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_owned(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for UserError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => {
                Self::Conflict("Username or email already exists".to_owned())
            }
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}
