use crate::api::review::error::ReviewError;
use crate::api::review::interfaces::{ReviewPayload, UpdateReviewPayload};
use crate::database::review::{NewReview, Review};
use crate::database::review_store::ReviewStore;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Creates the caller's review for a media item, or updates it in place when one exists.
///
/// Payloads that break a rule are rejected before any database access.
pub async fn submit_review(
    pool: &PgPool,
    user_id: i32,
    payload: &ReviewPayload,
) -> Result<Review, ReviewError> {
    payload
        .validate()
        .map_err(|e| ReviewError::BadRequest(e.to_string()))?;

    let review = ReviewStore::upsert(
        pool,
        &NewReview {
            user_id,
            media_id: payload.media_id,
            media_type: payload.media_type,
            rating: payload.rating,
            comment: &payload.comment,
            media_title: &payload.media_title,
            media_poster_path: &payload.media_poster_path,
        },
    )
    .await?;
    info!(
        "User {} reviewed {} {} with {}",
        user_id, review.media_type, review.media_id, review.rating
    );
    Ok(review)
}

/// Changes rating and comment of a review the caller owns.
///
/// # Errors
///
/// * `ReviewError::Forbidden` when the review doesn't exist or belongs to someone else.
pub async fn update_review(
    pool: &PgPool,
    user_id: i32,
    review_id: i32,
    payload: &UpdateReviewPayload,
) -> Result<(), ReviewError> {
    payload
        .validate()
        .map_err(|e| ReviewError::BadRequest(e.to_string()))?;

    let updated =
        ReviewStore::update_if_owner(pool, review_id, user_id, payload.rating, &payload.comment)
            .await?;
    if updated == 0 {
        return Err(ReviewError::Forbidden(format!(
            "user {user_id} tried to update review {review_id}"
        )));
    }
    Ok(())
}
