use color_eyre::eyre::Result;
use common_services::database::run_migrations;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use url::Url;

/// Recreates `db_name` on the server behind `base_url` and migrates it.
/// Returns a pool on the new database and one on the management database.
pub async fn create_test_database(base_url: &str, db_name: &str) -> Result<(PgPool, PgPool)> {
    let management_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(base_url)
        .await?;
    force_drop_db(&management_pool, db_name).await?;
    sqlx::query(&format!(r#"CREATE DATABASE "{db_name}""#))
        .execute(&management_pool)
        .await?;
    info!("Created test database {}", db_name);

    let mut db_url = Url::parse(base_url)?;
    db_url.set_path(db_name);
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(db_url.as_str())
        .await?;
    run_migrations(&pool).await?;
    Ok((pool, management_pool))
}

pub async fn force_drop_db(management_pool: &PgPool, db_name: &str) -> Result<()> {
    sqlx::query(&format!(r#"DROP DATABASE IF EXISTS "{db_name}" WITH (FORCE)"#))
        .execute(management_pool)
        .await?;
    Ok(())
}
