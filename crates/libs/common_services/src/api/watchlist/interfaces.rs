use crate::database::media::MediaType;
use crate::database::watchlist_item::WatchStatus;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /watchlist`.
#[derive(Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItemPayload {
    #[validate(range(min = 1, message = "mediaId must be positive"))]
    pub media_id: i32,
    pub media_type: MediaType,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub poster_path: String,
    pub status: WatchStatus,
}
