use crate::database::media::MediaType;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /reviews`.
#[derive(Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    #[validate(range(min = 1, message = "mediaId must be positive"))]
    pub media_id: i32,
    pub media_type: MediaType,
    #[serde(default)]
    pub media_title: String,
    #[serde(default)]
    pub media_poster_path: String,
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Body of `PUT /reviews/{id}`.
#[derive(Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewPayload {
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}
