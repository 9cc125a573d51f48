use crate::database::DbError;
use crate::database::media::MediaType;
use crate::database::review::{MediaReview, NewReview, Review, ReviewAggregate, UserReview};
use sqlx::{Executor, Postgres};

const REVIEW_COLUMNS: &str = "id, user_id, media_id, media_type, rating, comment, media_title, \
                              media_poster_path, created_at, updated_at";

pub struct ReviewStore;

impl ReviewStore {
    /// Inserts a review, or replaces rating, comment, media title, poster and `updated_at`
    /// in place when the user already reviewed this media. One statement, so concurrent
    /// submissions for the same key are arbitrated by Postgres and never produce two rows.
    pub async fn upsert(
        executor: impl Executor<'_, Database = Postgres>,
        review: &NewReview<'_>,
    ) -> Result<Review, DbError> {
        let query = format!(
            "INSERT INTO reviews
                 (user_id, media_id, media_type, rating, comment, media_title, media_poster_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id, media_id, media_type)
             DO UPDATE SET rating = EXCLUDED.rating,
                           comment = EXCLUDED.comment,
                           media_title = EXCLUDED.media_title,
                           media_poster_path = EXCLUDED.media_poster_path,
                           updated_at = now()
             RETURNING {REVIEW_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Review>(&query)
            .bind(review.user_id)
            .bind(review.media_id)
            .bind(review.media_type)
            .bind(review.rating)
            .bind(review.comment)
            .bind(review.media_title)
            .bind(review.media_poster_path)
            .fetch_one(executor)
            .await?)
    }

    /// Updates rating and comment only when `user_id` owns the review.
    /// Returns the number of rows updated, so 0 means "missing or not yours".
    pub async fn update_if_owner(
        executor: impl Executor<'_, Database = Postgres>,
        review_id: i32,
        user_id: i32,
        rating: i32,
        comment: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE reviews
             SET rating = $1, comment = $2, updated_at = now()
             WHERE id = $3 AND user_id = $4",
        )
        .bind(rating)
        .bind(comment)
        .bind(review_id)
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        review_id: i32,
    ) -> Result<Option<Review>, DbError> {
        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1");
        Ok(sqlx::query_as::<_, Review>(&query)
            .bind(review_id)
            .fetch_optional(executor)
            .await?)
    }

    /// All reviews of one media item with their reviewer, newest first.
    pub async fn list_for_media(
        executor: impl Executor<'_, Database = Postgres>,
        media_id: i32,
        media_type: MediaType,
    ) -> Result<Vec<MediaReview>, DbError> {
        Ok(sqlx::query_as::<_, MediaReview>(
            "SELECT r.id, r.rating, r.comment, r.created_at, u.username,
                    COALESCE(u.profile_picture_url, '') AS profile_picture_url
             FROM reviews r
             JOIN users u ON r.user_id = u.id
             WHERE r.media_id = $1 AND r.media_type = $2
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(media_id)
        .bind(media_type)
        .fetch_all(executor)
        .await?)
    }

    /// The most recent `limit` reviews written by `username`.
    pub async fn list_for_user(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
        limit: i64,
    ) -> Result<Vec<UserReview>, DbError> {
        Ok(sqlx::query_as::<_, UserReview>(
            "SELECT r.id, r.media_id, r.media_type, r.media_title, r.media_poster_path,
                    r.rating, r.comment, r.created_at, r.updated_at
             FROM reviews r
             JOIN users u ON r.user_id = u.id
             WHERE u.username = $1
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $2",
        )
        .bind(username)
        .bind(limit)
        .fetch_all(executor)
        .await?)
    }

    /// Mean rating and review count of a user, `(0.0, 0)` without reviews.
    pub async fn aggregate_for_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<ReviewAggregate, DbError> {
        Ok(sqlx::query_as::<_, ReviewAggregate>(
            "SELECT COALESCE(AVG(rating), 0)::DOUBLE PRECISION AS mean_rating,
                    COUNT(*) AS count
             FROM reviews
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?)
    }
}
