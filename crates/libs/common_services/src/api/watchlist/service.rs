use crate::api::watchlist::error::WatchlistError;
use crate::api::watchlist::interfaces::WatchlistItemPayload;
use crate::database::watchlist_item::{NewWatchlistItem, WatchlistEntry, WatchlistItem};
use crate::database::watchlist_store::WatchlistStore;
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Adds an item to the user's watchlist, or replaces status and timestamp of the
/// entry that already exists for this media.
pub async fn upsert_watchlist_item(
    pool: &PgPool,
    user_id: i32,
    payload: &WatchlistItemPayload,
) -> Result<WatchlistItem, WatchlistError> {
    payload
        .validate()
        .map_err(|e| WatchlistError::BadRequest(e.to_string()))?;

    let item = WatchlistStore::upsert(
        pool,
        &NewWatchlistItem {
            user_id,
            media_id: payload.media_id,
            media_type: payload.media_type,
            title: &payload.title,
            poster_path: &payload.poster_path,
            status: payload.status,
        },
    )
    .await?;
    info!(
        "User {} set {} {} to '{}'",
        user_id, item.media_type, item.media_id, item.status
    );
    Ok(item)
}

pub async fn list_watchlist(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<WatchlistEntry>, WatchlistError> {
    Ok(WatchlistStore::list(pool, user_id).await?)
}

/// Removes the caller's entry for `media_id`. Not found when the caller has none.
pub async fn remove_watchlist_item(
    pool: &PgPool,
    user_id: i32,
    media_id: i32,
) -> Result<(), WatchlistError> {
    let removed = WatchlistStore::delete(pool, user_id, media_id).await?;
    if removed == 0 {
        return Err(WatchlistError::NotFound(format!(
            "Media {media_id} is not on your watchlist"
        )));
    }
    Ok(())
}
