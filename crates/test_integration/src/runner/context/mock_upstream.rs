use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use color_eyre::Result;
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A stand-in for the metadata provider. Movie credits always fail with a 500,
/// every other section answers with a small JSON document.
pub async fn spawn_mock_upstream() -> Result<(SocketAddr, JoinHandle<()>)> {
    let app = Router::new()
        .route(
            "/3/{media_type}/{id}",
            get(|Path((media_type, id)): Path<(String, i32)>| async move {
                axum::Json(json!({ "id": id, "media_type": media_type, "title": "Mocked" }))
            }),
        )
        .route(
            "/3/{media_type}/{id}/credits",
            get(
                |Path((media_type, id)): Path<(String, i32)>| async move {
                    if media_type == "movie" {
                        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(json!({})))
                    } else {
                        (StatusCode::OK, axum::Json(json!({ "id": id, "cast": [] })))
                    }
                },
            ),
        )
        .route(
            "/3/{media_type}/{id}/videos",
            get(|Path((_, id)): Path<(String, i32)>| async move {
                axum::Json(json!({ "id": id, "results": [] }))
            }),
        )
        .route(
            "/3/{media_type}/{id}/recommendations",
            get(|| async { axum::Json(json!({ "page": 1, "results": [] })) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok((addr, handle))
}
