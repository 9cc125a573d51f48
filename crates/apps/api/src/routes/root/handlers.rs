use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    /// Whether an upstream api key is configured.
    pub tmdb: bool,
    /// Whether the database answered.
    pub db: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Process is up, with the state of its dependencies", body = HealthResponse),
    )
)]
pub async fn health_check(State(context): State<ApiContext>) -> Json<HealthResponse> {
    let db = match sqlx::query("SELECT 1").fetch_one(&context.pool).await {
        Ok(_) => true,
        Err(e) => {
            error!("Health check failed: database connection error: {}", e);
            false
        }
    };
    Json(HealthResponse {
        ok: true,
        tmdb: context.tmdb.has_api_key(),
        db,
    })
}
