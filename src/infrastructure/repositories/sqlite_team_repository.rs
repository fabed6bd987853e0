use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::team::Team;
use crate::domain::timestamps::Timestamps;

/// SQLite implementation of TeamRepository
///
/// Team deletion enforces referential integrity explicitly: dependent
/// user rows are removed in the same transaction instead of relying on
/// an implicit cascade.
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Creates a new SqliteTeamRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: String,
    name: String,
    vote_num: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TeamRow {
    fn into_team(self) -> Result<Team, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Storage(format!("Invalid team id from database: {e}")))?;

        Ok(Team::from_persistence(
            id,
            self.name,
            self.vote_num,
            Timestamps::from_persistence(self.created_at, self.updated_at, self.deleted_at),
        ))
    }
}

const SELECT_TEAM: &str = r#"
    SELECT id, name, vote_num, created_at, updated_at, deleted_at
    FROM teams
"#;

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, vote_num, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                vote_num = excluded.vote_num,
                updated_at = excluded.updated_at,
                deleted_at = excluded.deleted_at
            "#,
        )
        .bind(team.id().to_string())
        .bind(team.name())
        .bind(team.vote_num())
        .bind(team.timestamps().created_at())
        .bind(Utc::now())
        .bind(team.timestamps().deleted_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to save team: {e}")))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to find team by id: {e}")))?;

        row.map(TeamRow::into_team).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let rows =
            sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE deleted_at IS NULL ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(format!("Failed to list teams: {e}")))?;

        rows.into_iter().map(TeamRow::into_team).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to begin transaction: {e}")))?;

        let members = sqlx::query("DELETE FROM users WHERE team_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to delete team members: {e}")))?;

        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to delete team: {e}")))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the member deletes
            return Err(RepositoryError::NotFound(format!("team {id}")));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Storage(format!("Failed to commit delete: {e}")))?;

        tracing::info!(
            team_id = %id,
            members = members.rows_affected(),
            "Deleted team and its member rows"
        );

        Ok(())
    }
}
