use crate::database::media::MediaType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `reviews`. Media title and poster are denormalized so the review
/// survives upstream metadata changes.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub rating: i32,
    pub comment: String,
    pub media_title: String,
    pub media_poster_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review as shown on a media detail page.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaReview {
    pub id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    /// Empty when the reviewer has no profile picture.
    pub profile_picture_url: String,
}

/// A review as shown on a user's profile.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserReview {
    pub id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub media_title: String,
    pub media_poster_path: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone, Copy, PartialEq)]
pub struct ReviewAggregate {
    pub mean_rating: f64,
    pub count: i64,
}

/// Input of a review upsert, keyed on (`user_id`, `media_id`, `media_type`).
#[derive(Debug, Clone, Copy)]
pub struct NewReview<'a> {
    pub user_id: i32,
    pub media_id: i32,
    pub media_type: MediaType,
    pub rating: i32,
    pub comment: &'a str,
    pub media_title: &'a str,
    pub media_poster_path: &'a str,
}
