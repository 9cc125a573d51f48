use crate::api_state::ApiContext;
use crate::media::handlers::{get_movie_details, get_tv_details};
use axum::{Router, routing::get};

pub fn media_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/movie/{id}", get(get_movie_details))
        .route("/tv/{id}", get(get_tv_details))
}
