use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, State};
use common_services::api::media::error::MediaError;
use common_services::api::media::interfaces::MediaDetailsResponse;
use common_services::api::media::service::get_media_details;
use common_services::database::media::MediaType;
use tracing::instrument;

/// Merged movie details: every upstream section that answered, plus local reviews.
#[utoipa::path(
    get,
    path = "/movie/{id}",
    tag = "Media",
    params(
        ("id" = i32, Path, description = "Upstream movie id")
    ),
    responses(
        (status = 200, description = "Object with one key per fetched section and a `reviews` array"),
        (status = 500, description = "Reviews could not be loaded"),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_movie_details(
    State(context): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<MediaDetailsResponse>, MediaError> {
    let details = get_media_details(&context.pool, &context.tmdb, MediaType::Movie, id).await?;
    Ok(Json(details))
}

/// Merged TV show details: every upstream section that answered, plus local reviews.
#[utoipa::path(
    get,
    path = "/tv/{id}",
    tag = "Media",
    params(
        ("id" = i32, Path, description = "Upstream TV show id")
    ),
    responses(
        (status = 200, description = "Object with one key per fetched section and a `reviews` array"),
        (status = 500, description = "Reviews could not be loaded"),
    )
)]
#[instrument(skip(context), err(Debug))]
pub async fn get_tv_details(
    State(context): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<MediaDetailsResponse>, MediaError> {
    let details = get_media_details(&context.pool, &context.tmdb, MediaType::Tv, id).await?;
    Ok(Json(details))
}
