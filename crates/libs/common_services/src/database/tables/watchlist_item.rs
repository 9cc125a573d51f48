use crate::database::media::MediaType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Maps to the `watch_status` Postgres enum.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash, ToSchema,
)]
#[sqlx(type_name = "watch_status")]
pub enum WatchStatus {
    Watching,
    Completed,
    #[sqlx(rename = "Plan to Watch")]
    #[serde(rename = "Plan to Watch")]
    PlanToWatch,
    #[sqlx(rename = "On-Hold")]
    #[serde(rename = "On-Hold")]
    OnHold,
    Dropped,
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Watching => "Watching",
            Self::Completed => "Completed",
            Self::PlanToWatch => "Plan to Watch",
            Self::OnHold => "On-Hold",
            Self::Dropped => "Dropped",
        };
        f.write_str(label)
    }
}

/// A row of `watchlist_items`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: i32,
    pub user_id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub title: String,
    pub poster_path: String,
    pub status: WatchStatus,
    pub added_at: DateTime<Utc>,
}

/// A watchlist item as listed to its owner, with the owner's own rating (0 when unrated).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub title: String,
    pub poster_path: String,
    pub status: WatchStatus,
    pub added_at: DateTime<Utc>,
    pub rating: i32,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
pub struct WatchlistStatusCount {
    pub status: WatchStatus,
    pub count: i64,
}

/// Input of a watchlist upsert, keyed on (`user_id`, `media_id`, `media_type`).
#[derive(Debug, Clone, Copy)]
pub struct NewWatchlistItem<'a> {
    pub user_id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub title: &'a str,
    pub poster_path: &'a str,
    pub status: WatchStatus,
}
