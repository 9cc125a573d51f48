use crate::routes::{auth, media, reviews, root, users, watchlist};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::health_check,
        // Auth handlers
        auth::handlers::register,
        auth::handlers::login,
        // Media handlers
        media::handlers::get_movie_details,
        media::handlers::get_tv_details,
        // Watchlist handlers
        watchlist::handlers::add_to_watchlist,
        watchlist::handlers::get_watchlist,
        watchlist::handlers::remove_from_watchlist,
        // Review handlers
        reviews::handlers::create_review,
        reviews::handlers::update_review_handler,
        // User handlers
        users::handlers::get_profile_handler,
        users::handlers::update_profile_handler,
        users::handlers::update_password_handler,
        users::handlers::get_user_stats_handler,
        users::handlers::get_user_reviews_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Media", description = "Movie and TV details merged from upstream metadata and local reviews"),
        (name = "Watchlist", description = "The caller's watchlist"),
        (name = "Reviews", description = "Ratings and comments"),
        (name = "Users", description = "Accounts, profiles and statistics"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
