use crate::api_state::ApiContext;
use crate::extract::JsonBody;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use common_services::api::auth::token::Principal;
use common_services::api::interfaces::MessageResponse;
use common_services::api::review::error::ReviewError;
use common_services::api::review::interfaces::{ReviewPayload, UpdateReviewPayload};
use common_services::api::review::service::{submit_review, update_review};
use common_services::database::review::Review;
use tracing::instrument;

/// Review a media item. Submitting again for the same media replaces the earlier review.
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    request_body = ReviewPayload,
    responses(
        (status = 201, description = "The stored review", body = Review),
        (status = 400, description = "Malformed body or rating outside 1..=10"),
        (status = 401, description = "Authentication required"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal, payload), fields(user_id = principal.user_id), err(Debug))]
pub async fn create_review(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    JsonBody(payload): JsonBody<ReviewPayload>,
) -> Result<(StatusCode, Json<Review>), ReviewError> {
    let review = submit_review(&context.pool, principal.user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Change rating and comment of one of the caller's reviews.
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "Reviews",
    request_body = UpdateReviewPayload,
    params(
        ("id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review updated", body = MessageResponse),
        (status = 400, description = "Malformed body or rating outside 1..=10"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Review doesn't exist or isn't the caller's"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal, payload), fields(user_id = principal.user_id), err(Debug))]
pub async fn update_review_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    Path(review_id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateReviewPayload>,
) -> Result<Json<MessageResponse>, ReviewError> {
    update_review(&context.pool, principal.user_id, review_id, &payload).await?;
    Ok(Json(MessageResponse::new("Review updated successfully")))
}
