use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::api::auth::token::TokenKeys;
use common_services::tmdb::TmdbClient;
use sqlx::PgPool;

/// Shared handles for all handlers, built once in `serve`.
#[derive(Clone)]
pub struct ApiContext {
    pub pool: PgPool,
    pub tmdb: TmdbClient,
    pub token_keys: TokenKeys,
    pub settings: AppSettings,
}

// These impls allow extractors that only need one part of the state to ask for just that part.
impl FromRef<ApiContext> for PgPool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for TmdbClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.tmdb.clone()
    }
}

impl FromRef<ApiContext> for TokenKeys {
    fn from_ref(state: &ApiContext) -> Self {
        state.token_keys.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
