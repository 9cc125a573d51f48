use crate::api_state::ApiContext;
use crate::watchlist::handlers::{add_to_watchlist, get_watchlist, remove_from_watchlist};
use axum::{
    Router,
    routing::{delete, get},
};

pub fn watchlist_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/watchlist", get(get_watchlist).post(add_to_watchlist))
        .route("/watchlist/{id}", delete(remove_from_watchlist))
}
