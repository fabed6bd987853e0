// Team domain module
// Contains the team aggregate root

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::{Team, MAX_TEAM_NAME_LEN};
