use crate::api_state::ApiContext;
use crate::reviews::handlers::{create_review, update_review_handler};
use axum::{
    Router,
    routing::{post, put},
};

pub fn reviews_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/reviews", post(create_review))
        .route("/reviews/{id}", put(update_review_handler))
}
