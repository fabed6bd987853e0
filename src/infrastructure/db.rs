//! SQLite pool construction and schema setup.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Opens a SQLite connection pool
///
/// Foreign keys are enabled on every connection and the database file
/// is created when missing.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // A :memory: database lives and dies with its connection, so the
    // pool must not open a second one.
    let max_connections = if url.contains(":memory:") || url.contains("mode=memory") {
        1
    } else {
        5
    };

    tracing::info!(url, "Connecting to database");
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Opens a pool from the `DATABASE_URL` environment variable
///
/// Falls back to an in-memory database when the variable is unset.
pub async fn connect_from_env() -> Result<SqlitePool, sqlx::Error> {
    dotenv::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using in-memory database");
        "sqlite::memory:".to_string()
    });

    connect(&database_url).await
}

/// Creates the `teams` and `users` tables if they do not exist
///
/// `users.team_id` references `teams.id` without a cascade: removal of
/// dependent rows is handled explicitly by the team repository.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            vote_num    INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            deleted_at  TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id             TEXT PRIMARY KEY,
            team_id        TEXT NOT NULL REFERENCES teams(id),
            email          TEXT NOT NULL UNIQUE,
            part           TEXT NOT NULL,
            name           TEXT NOT NULL,
            password_hash  TEXT,
            part_voted     INTEGER NOT NULL DEFAULT 0,
            demo_voted     INTEGER NOT NULL DEFAULT 0,
            vote_num       INTEGER NOT NULL DEFAULT 0,
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL,
            deleted_at     TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
