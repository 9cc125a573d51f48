use crate::api_state::ApiContext;
use crate::extract::JsonBody;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use common_services::api::auth::token::Principal;
use common_services::api::interfaces::MessageResponse;
use common_services::api::watchlist::error::WatchlistError;
use common_services::api::watchlist::interfaces::WatchlistItemPayload;
use common_services::api::watchlist::service::{
    list_watchlist, remove_watchlist_item, upsert_watchlist_item,
};
use common_services::database::watchlist_item::{WatchlistEntry, WatchlistItem};
use tracing::instrument;

/// Add a media item to the watchlist, or change its status if it's already there.
#[utoipa::path(
    post,
    path = "/watchlist",
    tag = "Watchlist",
    request_body = WatchlistItemPayload,
    responses(
        (status = 200, description = "The stored watchlist item", body = WatchlistItem),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Authentication required"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal, payload), fields(user_id = principal.user_id), err(Debug))]
pub async fn add_to_watchlist(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    JsonBody(payload): JsonBody<WatchlistItemPayload>,
) -> Result<Json<WatchlistItem>, WatchlistError> {
    let item = upsert_watchlist_item(&context.pool, principal.user_id, &payload).await?;
    Ok(Json(item))
}

/// The caller's watchlist, most recently added first.
#[utoipa::path(
    get,
    path = "/watchlist",
    tag = "Watchlist",
    responses(
        (status = 200, description = "Watchlist items with the caller's rating", body = [WatchlistEntry]),
        (status = 401, description = "Authentication required"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_watchlist(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<WatchlistEntry>>, WatchlistError> {
    Ok(Json(list_watchlist(&context.pool, principal.user_id).await?))
}

/// Remove a media item from the caller's watchlist.
#[utoipa::path(
    delete,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(
        ("id" = i32, Path, description = "Media id")
    ),
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "The caller has no entry for this media"),
        (status = 401, description = "Authentication required"),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[instrument(skip(context, principal), fields(user_id = principal.user_id), err(Debug))]
pub async fn remove_from_watchlist(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    Path(media_id): Path<i32>,
) -> Result<Json<MessageResponse>, WatchlistError> {
    remove_watchlist_item(&context.pool, principal.user_id, media_id).await?;
    Ok(Json(MessageResponse::new("Item removed from watchlist")))
}
