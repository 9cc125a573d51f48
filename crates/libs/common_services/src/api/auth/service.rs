use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::interfaces::{LoginPayload, RegisterPayload};
use crate::api::auth::token::TokenKeys;
use crate::database::app_user::User;
use crate::database::user_store::UserStore;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Creates a new user in the database.
///
/// # Errors
///
/// * `AuthError::Validation` when the payload breaks a username, email or password rule.
/// * `AuthError::UserAlreadyExists` if the username or email is taken.
/// * `AuthError::Internal` for hashing and other database errors.
pub async fn register_user(pool: &PgPool, payload: &RegisterPayload) -> Result<User, AuthError> {
    payload
        .validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    let hashed = hash_password(payload.password.as_bytes())?;
    let user = UserStore::create(pool, &payload.username, &payload.email, &hashed).await?;
    info!("Registered user id={}, username={}", user.id, user.username);
    Ok(user)
}

/// Authenticates a user by email and password and issues a token.
///
/// Unknown email and wrong password both yield `AuthError::InvalidCredentials`.
pub async fn login_user(
    pool: &PgPool,
    keys: &TokenKeys,
    payload: &LoginPayload,
) -> Result<String, AuthError> {
    payload
        .validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    let user = UserStore::find_by_email_with_password(pool, &payload.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(payload.password.as_bytes(), &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    keys.issue(user.id, &user.username)
}
