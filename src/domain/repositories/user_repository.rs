use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// Repository trait for the User aggregate
///
/// List queries exclude soft-deleted rows; primary-key lookup does
/// not, so a soft-deleted user stays retrievable by id.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; exactly one row is written
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;

    /// Persist the current state of an existing user
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;

    /// Find a user by id, including soft-deleted users
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Find all active users belonging to a team
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<User>, RepositoryError>;

    /// Soft-delete a user: stamp deleted_at, keep the row
    async fn soft_delete(&self, id: &str) -> Result<(), RepositoryError>;
}
