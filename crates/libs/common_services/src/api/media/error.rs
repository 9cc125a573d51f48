use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

fn log_error(error: &MediaError) {
    match error {
        MediaError::BadRequest(message) => warn!("Media -> Bad Request: {}", message),
        MediaError::Database(e) => error!("Media -> Database query failed: {}", e),
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch reviews".to_owned(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for MediaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sql_err) | DbError::UniqueViolation(sql_err) => Self::Database(sql_err),
        }
    }
}
