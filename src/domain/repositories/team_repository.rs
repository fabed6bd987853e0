use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by its ID, including soft-deleted teams
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// Find all active teams, ordered by name
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Hard-delete a team and every user belonging to it
    ///
    /// Referential integrity is enforced here instead of by an
    /// implicit cascade: dependent user rows are removed in the same
    /// transaction, even users that were never soft-deleted first.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
