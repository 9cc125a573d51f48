use crate::runner::context::test_context::TestContext;
use color_eyre::eyre::{Result, eyre};
use common_services::api::auth::interfaces::{RegisterResponse, TokenResponse};
use common_services::database::review::Review;
use reqwest::StatusCode;
use serde_json::json;

pub const PASSWORD: &str = "correct-horse-battery";

pub fn email_for(username: &str) -> String {
    format!("{username}@example.com")
}

/// A registered and logged in user.
pub struct TestUser {
    pub id: i32,
    pub username: String,
    pub token: String,
}

/// Registers `username` with `PASSWORD` and logs in.
pub async fn create_user(context: &TestContext, username: &str) -> Result<TestUser> {
    let response = context
        .http_client
        .post(context.url("/users/register"))
        .json(&json!({
            "username": username,
            "email": email_for(username),
            "password": PASSWORD,
        }))
        .send()
        .await?;
    if response.status() != StatusCode::CREATED {
        return Err(eyre!(
            "Registering {username} failed with {}",
            response.status()
        ));
    }
    let registered: RegisterResponse = response.json().await?;

    let token: TokenResponse = context
        .http_client
        .post(context.url("/users/login"))
        .json(&json!({ "email": email_for(username), "password": PASSWORD }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(TestUser {
        id: registered.user_id,
        username: username.to_owned(),
        token: token.token,
    })
}

/// Submits a review and returns the stored row.
pub async fn post_review(
    context: &TestContext,
    user: &TestUser,
    media_id: i32,
    media_type: &str,
    rating: i32,
    comment: &str,
) -> Result<Review> {
    let review = context
        .http_client
        .post(context.url("/reviews"))
        .bearer_auth(&user.token)
        .json(&json!({
            "mediaId": media_id,
            "mediaType": media_type,
            "mediaTitle": format!("Title {media_id}"),
            "mediaPosterPath": format!("/poster-{media_id}.jpg"),
            "rating": rating,
            "comment": comment,
        }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(review)
}

/// Number of rows in `table` for one (user, media) key.
pub async fn count_rows(
    context: &TestContext,
    table: &str,
    user_id: i32,
    media_id: i32,
) -> Result<i64> {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE user_id = $1 AND media_id = $2");
    Ok(sqlx::query_scalar::<_, i64>(&query)
        .bind(user_id)
        .bind(media_id)
        .fetch_one(&context.pool)
        .await?)
}
