use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

fn log_error(error: &ReviewError) {
    match error {
        ReviewError::BadRequest(message) => warn!("Review -> Bad Request: {}", message),
        ReviewError::Forbidden(message) => warn!("Review -> Forbidden: {}", message),
        ReviewError::Database(e) => error!("Review -> Database query failed: {}", e),
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            // The log line keeps the detail, the caller can't tell missing from not owned.
            Self::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                "You can only update your own reviews".to_owned(),
            ),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_owned(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for ReviewError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sql_err) | DbError::UniqueViolation(sql_err) => Self::Database(sql_err),
        }
    }
}
