use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

/// `Json` that answers every rejection with a 400 and the usual `{"error": ...}` body.
pub struct JsonBody<T>(pub T);

pub struct BadJsonBody(JsonRejection);

impl IntoResponse for BadJsonBody {
    fn into_response(self) -> Response {
        let message = self.0.body_text();
        warn!("Rejected request body: {}", message);
        let body = Json(json!({ "error": message }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BadJsonBody;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(BadJsonBody)?;
        Ok(Self(value))
    }
}
