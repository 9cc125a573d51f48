use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::user::error::UserError;
use crate::api::user::interfaces::{
    ReviewListQuery, UpdatePasswordPayload, UpdateProfilePayload, UserStats,
};
use crate::database::app_user::User;
use crate::database::review::UserReview;
use crate::database::review_store::ReviewStore;
use crate::database::user_store::UserStore;
use crate::database::watchlist_store::WatchlistStore;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

pub async fn get_profile(pool: &PgPool, user_id: i32) -> Result<User, UserError> {
    UserStore::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| UserError::NotFound("User not found".to_owned()))
}

/// Replaces username, email, description and profile picture of the caller.
///
/// # Errors
///
/// * `UserError::Conflict` when the new username or email belongs to another user.
pub async fn update_profile(
    pool: &PgPool,
    user_id: i32,
    payload: &UpdateProfilePayload,
) -> Result<User, UserError> {
    payload
        .validate()
        .map_err(|e| UserError::BadRequest(e.to_string()))?;

    let user = UserStore::update_profile(
        pool,
        user_id,
        &payload.username,
        &payload.email,
        &payload.description,
        &payload.profile_picture_url,
    )
    .await?
    .ok_or_else(|| UserError::NotFound("User not found".to_owned()))?;
    info!("User {} updated their profile", user.id);
    Ok(user)
}

/// Sets a new password after checking the current one.
pub async fn update_password(
    pool: &PgPool,
    user_id: i32,
    payload: &UpdatePasswordPayload,
) -> Result<(), UserError> {
    payload
        .validate()
        .map_err(|e| UserError::BadRequest(e.to_string()))?;

    let current_hash = UserStore::find_password_hash(pool, user_id)
        .await?
        .ok_or_else(|| UserError::NotFound("User not found".to_owned()))?;
    if !verify_password(payload.current_password.as_bytes(), &current_hash)? {
        return Err(UserError::InvalidPassword);
    }

    let new_hash = hash_password(payload.new_password.as_bytes())?;
    if UserStore::update_password_hash(pool, user_id, &new_hash).await? == 0 {
        return Err(UserError::NotFound("User not found".to_owned()));
    }
    info!("User {} changed their password", user_id);
    Ok(())
}

/// Watchlist status counts and review aggregate of a user, by username.
pub async fn get_user_stats(pool: &PgPool, username: &str) -> Result<UserStats, UserError> {
    let user_id = UserStore::find_id_by_username(pool, username)
        .await?
        .ok_or_else(|| UserError::NotFound("User not found".to_owned()))?;

    let (status_counts, aggregate) = tokio::try_join!(
        WatchlistStore::status_counts(pool, user_id),
        ReviewStore::aggregate_for_user(pool, user_id),
    )?;

    Ok(UserStats {
        total_entries: status_counts.iter().map(|s| s.count).sum(),
        watchlist_stats: status_counts,
        mean_score: aggregate.mean_rating,
        reviews_count: aggregate.count,
    })
}

/// The most recent reviews written by a user.
pub async fn list_user_reviews(
    pool: &PgPool,
    username: &str,
    query: &ReviewListQuery,
) -> Result<Vec<UserReview>, UserError> {
    if UserStore::find_id_by_username(pool, username)
        .await?
        .is_none()
    {
        return Err(UserError::NotFound("User not found".to_owned()));
    }
    Ok(ReviewStore::list_for_user(pool, username, query.effective_limit()).await?)
}
