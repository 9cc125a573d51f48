use crate::api::media::error::MediaError;
use crate::api::media::interfaces::{MediaDetailsResponse, assemble_details};
use crate::database::media::MediaType;
use crate::database::review_store::ReviewStore;
use crate::tmdb::{TmdbClient, fetch_sections};
use sqlx::PgPool;
use tracing::warn;

/// Builds the merged detail view of one movie or show.
///
/// Upstream legs and the review lookup run concurrently. Failed legs only shrink
/// the response, a failed review lookup fails the request.
pub async fn get_media_details(
    pool: &PgPool,
    tmdb: &TmdbClient,
    media_type: MediaType,
    media_id: i32,
) -> Result<MediaDetailsResponse, MediaError> {
    if media_id <= 0 {
        return Err(MediaError::BadRequest(format!(
            "Invalid {media_type} id: {media_id}"
        )));
    }

    let legs = tmdb.detail_legs(media_type, media_id).unwrap_or_else(|e| {
        warn!("Could not build upstream urls for {media_type} {media_id}: {e}");
        Vec::new()
    });

    let (sections, reviews) = tokio::join!(
        fetch_sections(tmdb, legs),
        ReviewStore::list_for_media(pool, media_id, media_type),
    );

    Ok(assemble_details(sections, reviews?))
}
