use crate::database::DbError;
use crate::database::app_user::{User, UserWithPassword};
use sqlx::{Executor, Postgres};

const USER_COLUMNS: &str = "id, username, email, profile_picture_url, description, created_at";

pub struct UserStore;

impl UserStore {
    //================================================================================
    // Core User Management
    //================================================================================

    /// Creates a new user. A taken username or email surfaces as `DbError::UniqueViolation`.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DbError> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(executor)
            .await?)
    }

    /// Replaces the editable profile fields. Returns `None` when the user doesn't exist.
    pub async fn update_profile(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        username: &str,
        email: &str,
        description: &str,
        profile_picture_url: &str,
    ) -> Result<Option<User>, DbError> {
        let query = format!(
            "UPDATE users
             SET username = $1, email = $2, description = $3, profile_picture_url = $4
             WHERE id = $5
             RETURNING {USER_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(email)
            .bind(description)
            .bind(profile_picture_url)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    /// Returns the number of rows updated, 0 when the user doesn't exist.
    pub async fn update_password_hash(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        password_hash: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    //================================================================================
    // Find / Get Methods
    //================================================================================

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn find_by_username(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
    ) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn find_by_email(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?)
    }

    /// Retrieves just the password hash for a specific user ID.
    pub async fn find_password_hash(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<String>, DbError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Retrieves just the id for a username.
    pub async fn find_id_by_username(
        executor: impl Executor<'_, Database = Postgres>,
        username: &str,
    ) -> Result<Option<i32>, DbError> {
        Ok(
            sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(executor)
                .await?,
        )
    }
}
