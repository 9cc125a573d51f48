use crate::api_state::ApiContext;
use crate::auth::handlers::{login, register};
use axum::{Router, routing::post};

pub fn auth_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
}
