use crate::api::auth::interfaces::validate_username;
use crate::database::watchlist_item::WatchlistStatusCount;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_REVIEW_LIMIT: i64 = 20;
pub const MAX_REVIEW_LIMIT: i64 = 100;

#[derive(Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
    #[serde(default)]
    pub profile_picture_url: String,
}

#[derive(Deserialize, Debug, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordPayload {
    #[validate(length(min = 1))]
    #[schema(value_type = String, format = "password")]
    pub current_password: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    #[schema(value_type = String, format = "password")]
    pub new_password: String,
}

/// Public statistics of a user.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub watchlist_stats: Vec<WatchlistStatusCount>,
    pub mean_score: f64,
    pub total_entries: i64,
    pub reviews_count: i64,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    /// Defaults to 20, capped at 100.
    pub limit: Option<i64>,
}

impl ReviewListQuery {
    #[must_use]
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_REVIEW_LIMIT)
            .clamp(1, MAX_REVIEW_LIMIT)
    }
}
