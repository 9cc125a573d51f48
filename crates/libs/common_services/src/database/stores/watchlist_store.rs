use crate::database::DbError;
use crate::database::watchlist_item::{
    NewWatchlistItem, WatchlistEntry, WatchlistItem, WatchlistStatusCount,
};
use sqlx::{Executor, Postgres};

pub struct WatchlistStore;

impl WatchlistStore {
    /// Adds a media item to a watchlist. When the user already tracks it, status, title,
    /// poster and `added_at` are replaced in place in the same statement.
    pub async fn upsert(
        executor: impl Executor<'_, Database = Postgres>,
        item: &NewWatchlistItem<'_>,
    ) -> Result<WatchlistItem, DbError> {
        Ok(sqlx::query_as::<_, WatchlistItem>(
            "INSERT INTO watchlist_items (user_id, media_id, media_type, title, poster_path, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id, media_id, media_type)
             DO UPDATE SET status = EXCLUDED.status,
                           title = EXCLUDED.title,
                           poster_path = EXCLUDED.poster_path,
                           added_at = now()
             RETURNING id, user_id, media_id, media_type, title, poster_path, status, added_at",
        )
        .bind(item.user_id)
        .bind(item.media_id)
        .bind(item.media_type)
        .bind(item.title)
        .bind(item.poster_path)
        .bind(item.status)
        .fetch_one(executor)
        .await?)
    }

    /// A user's watchlist, most recently added first, joined with the user's own ratings.
    pub async fn list(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Vec<WatchlistEntry>, DbError> {
        Ok(sqlx::query_as::<_, WatchlistEntry>(
            "SELECT wi.id, wi.media_id, wi.media_type, wi.title, wi.poster_path, wi.status,
                    wi.added_at, COALESCE(r.rating, 0) AS rating
             FROM watchlist_items wi
             LEFT JOIN reviews r
                 ON wi.user_id = r.user_id
                 AND wi.media_id = r.media_id
                 AND wi.media_type = r.media_type
             WHERE wi.user_id = $1
             ORDER BY wi.added_at DESC, wi.id DESC",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }

    /// Removes every entry of `media_id` owned by `user_id`. Returns the rows removed.
    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        media_id: i32,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM watchlist_items WHERE user_id = $1 AND media_id = $2")
            .bind(user_id)
            .bind(media_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Number of watchlist entries per status. Statuses without entries are absent.
    pub async fn status_counts(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Vec<WatchlistStatusCount>, DbError> {
        Ok(sqlx::query_as::<_, WatchlistStatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM watchlist_items
             WHERE user_id = $1
             GROUP BY status
             ORDER BY status",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?)
    }
}
