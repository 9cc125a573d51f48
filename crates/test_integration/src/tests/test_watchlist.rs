use crate::runner::context::test_context::TestContext;
use crate::test_helpers::{count_rows, create_user};
use color_eyre::Result;
use common_services::database::watchlist_item::{WatchStatus, WatchlistEntry, WatchlistItem};
use reqwest::StatusCode;
use serde_json::json;

pub async fn test_watchlist_upsert(context: &TestContext) -> Result<()> {
    // ARRANGE
    let user = create_user(context, "watch_wendy").await?;
    let body = |status: &str| {
        json!({
            "mediaId": 550,
            "mediaType": "movie",
            "title": "Fight Club",
            "posterPath": "/fc.jpg",
            "status": status,
        })
    };

    // ACT
    let first: WatchlistItem = context
        .http_client
        .post(context.url("/watchlist"))
        .bearer_auth(&user.token)
        .json(&body("Plan to Watch"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let second = context
        .http_client
        .post(context.url("/watchlist"))
        .bearer_auth(&user.token)
        .json(&body("Completed"))
        .send()
        .await?;
    let second_status = second.status();
    let second: WatchlistItem = second.json().await?;

    // ASSERT
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first.id, second.id);
    assert_eq!(second.status, WatchStatus::Completed);
    assert!(second.added_at > first.added_at);
    assert_eq!(count_rows(context, "watchlist_items", user.id, 550).await?, 1);

    let listed: Vec<WatchlistEntry> = context
        .http_client
        .get(context.url("/watchlist"))
        .bearer_auth(&user.token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, WatchStatus::Completed);
    assert_eq!(listed[0].rating, 0);

    Ok(())
}

pub async fn test_watchlist_delete(context: &TestContext) -> Result<()> {
    // ARRANGE
    let user = create_user(context, "watch_dave").await?;
    context
        .http_client
        .post(context.url("/watchlist"))
        .bearer_auth(&user.token)
        .json(&json!({
            "mediaId": 1399,
            "mediaType": "tv",
            "title": "Game of Thrones",
            "posterPath": "",
            "status": "Watching",
        }))
        .send()
        .await?
        .error_for_status()?;

    // ACT
    let first = context
        .http_client
        .delete(context.url("/watchlist/1399"))
        .bearer_auth(&user.token)
        .send()
        .await?;
    let second = context
        .http_client
        .delete(context.url("/watchlist/1399"))
        .bearer_auth(&user.token)
        .send()
        .await?;

    // ASSERT
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(context, "watchlist_items", user.id, 1399).await?, 0);

    Ok(())
}

pub async fn test_delete_foreign_watchlist_item(context: &TestContext) -> Result<()> {
    // ARRANGE
    let owner = create_user(context, "watch_owner").await?;
    let intruder = create_user(context, "watch_intruder").await?;
    context
        .http_client
        .post(context.url("/watchlist"))
        .bearer_auth(&owner.token)
        .json(&json!({
            "mediaId": 603,
            "mediaType": "movie",
            "title": "The Matrix",
            "posterPath": "/m.jpg",
            "status": "On-Hold",
        }))
        .send()
        .await?
        .error_for_status()?;

    // ACT
    let response = context
        .http_client
        .delete(context.url("/watchlist/603"))
        .bearer_auth(&intruder.token)
        .send()
        .await?;

    // ASSERT
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_rows(context, "watchlist_items", owner.id, 603).await?, 1);

    Ok(())
}
