use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use color_eyre::Result;
use common_services::api::auth::token::TokenKeys;
use common_services::tmdb::TmdbClient;
use http::{HeaderValue, header};
use reqwest::Client;
use sqlx::PgPool;
use std::iter::once;
use tokio::net::TcpListener;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Binds `api.host:api.port` and serves until the process stops.
pub async fn serve(pool: PgPool, settings: AppSettings) -> Result<()> {
    let listener =
        TcpListener::bind(format!("{}:{}", settings.api.host, settings.api.port)).await?;
    serve_on(listener, pool, settings).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: TcpListener, pool: PgPool, settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let api_state = create_context(pool, settings)?;

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = api_state
        .settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ]);

    // --- Create Router ---
    let app = create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetSensitiveRequestHeadersLayer::new(once(
            header::AUTHORIZATION,
        )));

    info!("🐸 Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the handles every request shares. Fails on an empty signing secret.
pub fn create_context(pool: PgPool, settings: AppSettings) -> Result<ApiContext> {
    let token_keys = TokenKeys::from_secret(&settings.secrets.jwt)?;
    let http_client = Client::builder()
        .user_agent(concat!("media-catalog/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let tmdb = TmdbClient::new(
        http_client,
        &settings.tmdb,
        &settings.secrets.tmdb_api_key,
    );
    Ok(ApiContext {
        pool,
        tmdb,
        token_keys,
        settings,
    })
}
