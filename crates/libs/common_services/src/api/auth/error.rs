use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("expired token")]
    ExpiredToken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_auth_failure(error: &AuthError) {
    match error {
        AuthError::MissingToken => warn!("Authentication failed: Missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: Invalid token provided."),
        AuthError::ExpiredToken => info!("Authentication failed: Token expired."),
        // info to reduce noise
        AuthError::InvalidCredentials => info!("Authentication failed: Invalid credentials."),
        AuthError::Validation(message) => info!("Auth request rejected: {}", message),
        AuthError::UserAlreadyExists => info!("Registration failed: User already exists."),
        AuthError::Internal(e) => error!("Internal server error during authentication: {:?}", e),
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, error_message) = match self {
            Self::MissingToken | Self::InvalidToken | Self::ExpiredToken => {
                (StatusCode::UNAUTHORIZED, "Authentication failed".to_owned())
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_owned(),
            ),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::UserAlreadyExists => (
                StatusCode::CONFLICT,
                "Username or email already exists".to_owned(),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_owned(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation(_) => Self::UserAlreadyExists,
            DbError::Sqlx(sql_err) => Self::Internal(eyre::Report::new(sql_err)),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(eyre::Report::new(err))
    }
}
