//! Registration and login.

use crate::api_state::ApiContext;
use crate::extract::JsonBody;
use axum::{Json, extract::State, http::StatusCode};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{
    LoginPayload, RegisterPayload, RegisterResponse, TokenResponse,
};
use common_services::api::auth::service::{login_user, register_user};
use tracing::instrument;

/// Handles the registration of a new user.
///
/// # Errors
///
/// Returns `AuthError` if the payload is invalid, the username or email is taken,
/// or a database error occurs during user creation.
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User created successfully", body = RegisterResponse),
        (status = 400, description = "Invalid username, email or password"),
        (status = 409, description = "Username or email already exists"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn register(
    State(context): State<ApiContext>,
    JsonBody(payload): JsonBody<RegisterPayload>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let user = register_user(&context.pool, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_owned(),
            user_id: user.id,
        }),
    ))
}

/// Handles user login and returns a signed token.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` for an unknown email or wrong password.
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Users",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn login(
    State(context): State<ApiContext>,
    JsonBody(payload): JsonBody<LoginPayload>,
) -> Result<Json<TokenResponse>, AuthError> {
    let token = login_user(&context.pool, &context.token_keys, &payload).await?;
    Ok(Json(TokenResponse { token }))
}
