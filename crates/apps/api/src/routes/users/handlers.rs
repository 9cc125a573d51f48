use crate::api_state::ApiContext;
use crate::extract::JsonBody;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use common_services::api::auth::token::Principal;
use common_services::api::interfaces::MessageResponse;
use common_services::api::user::error::UserError;
use common_services::api::user::interfaces::{
    ReviewListQuery, UpdatePasswordPayload, UpdateProfilePayload, UserStats,
};
use common_services::api::user::service::{
    get_profile, get_user_stats, list_user_reviews, update_password, update_profile,
};
use common_services::database::app_user::User;
use common_services::database::review::UserReview;
use tracing::instrument;

/// Get the caller's profile.
#[utoipa::path(
    get,
    path = "/users/profile",
    tag = "Users",
    responses(
        (status = 200, description = "Current user data", body = User),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User no longer exists"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<User>, UserError> {
    Ok(Json(get_profile(&context.pool, principal.user_id).await?))
}

/// Update the caller's profile.
#[utoipa::path(
    put,
    path = "/users/profile",
    tag = "Users",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Updated user data", body = User),
        (status = 400, description = "Invalid username or email"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Username or email already exists"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal, payload), fields(user_id = principal.user_id), err(Debug))]
pub async fn update_profile_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    JsonBody(payload): JsonBody<UpdateProfilePayload>,
) -> Result<Json<User>, UserError> {
    Ok(Json(
        update_profile(&context.pool, principal.user_id, &payload).await?,
    ))
}

/// Change the caller's password.
#[utoipa::path(
    put,
    path = "/users/password",
    tag = "Users",
    request_body = UpdatePasswordPayload,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "New password too short"),
        (status = 401, description = "Not authenticated, or wrong current password"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal, payload), fields(user_id = principal.user_id), err(Debug))]
pub async fn update_password_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    JsonBody(payload): JsonBody<UpdatePasswordPayload>,
) -> Result<Json<MessageResponse>, UserError> {
    update_password(&context.pool, principal.user_id, &payload).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

/// Public watchlist and review statistics of a user.
#[utoipa::path(
    get,
    path = "/users/{username}/stats",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User statistics", body = UserStats),
        (status = 404, description = "Unknown username"),
    )
)]
pub async fn get_user_stats_handler(
    State(context): State<ApiContext>,
    Path(username): Path<String>,
) -> Result<Json<UserStats>, UserError> {
    Ok(Json(get_user_stats(&context.pool, &username).await?))
}

/// A user's most recent reviews.
#[utoipa::path(
    get,
    path = "/users/{username}/reviews",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username"),
        ReviewListQuery
    ),
    responses(
        (status = 200, description = "Reviews, newest first", body = [UserReview]),
        (status = 404, description = "Unknown username"),
    )
)]
pub async fn get_user_reviews_handler(
    State(context): State<ApiContext>,
    Path(username): Path<String>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<Vec<UserReview>>, UserError> {
    Ok(Json(
        list_user_reviews(&context.pool, &username, &query).await?,
    ))
}
