// Repository ports (domain-facing storage contracts)
// Implementations live in the infrastructure layer

pub mod team_repository;
pub mod user_repository;

pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;

use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Another user already registered this email
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Another user already claimed this id
    #[error("User id already taken: {0}")]
    DuplicateId(String),

    /// No record matched the given key
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Any other storage-level failure
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = RepositoryError::DuplicateEmail("a@b.com".to_string());
        assert!(err.to_string().contains("a@b.com"));

        let err = RepositoryError::NotFound("team 42".to_string());
        assert!(err.to_string().contains("team 42"));
    }
}
