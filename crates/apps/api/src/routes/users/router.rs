use crate::api_state::ApiContext;
use crate::users::handlers::{
    get_profile_handler, get_user_reviews_handler, get_user_stats_handler,
    update_password_handler, update_profile_handler,
};
use axum::{
    Router,
    routing::{get, put},
};

pub fn users_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/users/{username}/stats", get(get_user_stats_handler))
        .route("/users/{username}/reviews", get(get_user_reviews_handler))
}

pub fn users_protected_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/users/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .route("/users/password", put(update_password_handler))
}
