use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::timestamps::Timestamps;
use crate::domain::user::value_objects::{Email, Part};
use crate::domain::user::User;

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Creates a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    team_id: String,
    email: String,
    part: Part,
    name: String,
    password_hash: Option<String>,
    part_voted: bool,
    demo_voted: bool,
    vote_num: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::new(&self.email)
            .map_err(|e| RepositoryError::Storage(format!("Invalid email from database: {e}")))?;
        let team_id = Uuid::parse_str(&self.team_id)
            .map_err(|e| RepositoryError::Storage(format!("Invalid team id from database: {e}")))?;

        Ok(User::from_persistence(
            self.id,
            team_id,
            email,
            self.part,
            self.name,
            self.password_hash,
            self.part_voted,
            self.demo_voted,
            self.vote_num,
            Timestamps::from_persistence(self.created_at, self.updated_at, self.deleted_at),
        ))
    }
}

/// Maps a driver error to the repository taxonomy, folding unique
/// constraint violations into the duplicate variants.
fn map_write_error(e: sqlx::Error, user: &User) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        let message = db.message();
        if message.contains("UNIQUE constraint failed: users.email") {
            return RepositoryError::DuplicateEmail(user.email().to_string());
        }
        if message.contains("UNIQUE constraint failed: users.id") {
            return RepositoryError::DuplicateId(user.id().to_string());
        }
    }
    RepositoryError::Storage(format!("Failed to write user: {e}"))
}

const SELECT_USER: &str = r#"
    SELECT id, team_id, email, part, name, password_hash,
           part_voted, demo_voted, vote_num,
           created_at, updated_at, deleted_at
    FROM users
"#;

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, team_id, email, part, name, password_hash,
                part_voted, demo_voted, vote_num,
                created_at, updated_at, deleted_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id())
        .bind(user.team_id().to_string())
        .bind(user.email().as_str())
        .bind(user.part())
        .bind(user.name())
        .bind(user.password_hash())
        .bind(user.part_voted())
        .bind(user.demo_voted())
        .bind(user.vote_num())
        .bind(user.timestamps().created_at())
        .bind(user.timestamps().updated_at())
        .bind(user.timestamps().deleted_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user))?;

        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        // updated_at is refreshed on every save regardless of what the
        // aggregate carries
        let result = sqlx::query(
            r#"
            UPDATE users
            SET team_id = ?, email = ?, part = ?, name = ?,
                password_hash = ?, part_voted = ?, demo_voted = ?,
                vote_num = ?, updated_at = ?, deleted_at = ?
            WHERE id = ?
            "#,
        )
        .bind(user.team_id().to_string())
        .bind(user.email().as_str())
        .bind(user.part())
        .bind(user.name())
        .bind(user.password_hash())
        .bind(user.part_voted())
        .bind(user.demo_voted())
        .bind(user.vote_num())
        .bind(Utc::now())
        .bind(user.timestamps().deleted_at())
        .bind(user.id())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("user {}", user.id())));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to find user by id: {e}")))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to find user by email: {e}")))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE team_id = ? AND deleted_at IS NULL ORDER BY name"
        ))
        .bind(team_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to find users by team: {e}")))?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut user = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))?;

        user.soft_delete();
        self.save(&user).await
    }
}
