// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_team_repository;
pub mod sqlite_user_repository;

pub use sqlite_team_repository::SqliteTeamRepository;
pub use sqlite_user_repository::SqliteUserRepository;
