use crate::domain::error::DomainError;
use crate::domain::timestamps::Timestamps;
use uuid::Uuid;

/// Maximum length of a team name
pub const MAX_TEAM_NAME_LEN: usize = 20;

/// Team aggregate root
///
/// A group that users belong to; accumulates a vote tally as ballots
/// are cast for it.
///
/// # Invariants
/// - Name cannot be empty and is at most 20 characters
/// - Vote tally starts at zero and only moves by increments
///
/// # Example
/// ```
/// use demoday::domain::team::Team;
///
/// let team = Team::new("pirates").expect("valid team");
/// assert_eq!(team.name(), "pirates");
/// assert_eq!(team.vote_num(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    vote_num: i32,
    timestamps: Timestamps,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - With a fresh id and a zero vote tally
    /// * `Err(DomainError)` - If the name is empty or over-long
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingTeamName);
        }
        if name.len() > MAX_TEAM_NAME_LEN {
            return Err(DomainError::FieldTooLong {
                field: "name",
                max: MAX_TEAM_NAME_LEN,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            vote_num: 0,
            timestamps: Timestamps::now(),
        })
    }

    /// Adds one vote to the team's tally
    pub fn record_vote(&mut self) {
        self.vote_num += 1;
        self.timestamps.touch();
    }

    /// Stamps the team as deleted without removing it
    pub fn soft_delete(&mut self) {
        self.timestamps.mark_deleted();
    }

    /// Returns true while the team has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.timestamps.is_active()
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the team's vote tally
    pub fn vote_num(&self) -> i32 {
        self.vote_num
    }

    /// Returns the record lifecycle timestamps
    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was
    /// stored. Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, name: String, vote_num: i32, timestamps: Timestamps) -> Self {
        Self {
            id,
            name,
            vote_num,
            timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let team = Team::new("pirates").unwrap();

        assert_eq!(team.name(), "pirates");
        assert_eq!(team.vote_num(), 0);
        assert!(team.is_active());
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        assert!(matches!(Team::new(""), Err(DomainError::MissingTeamName)));
    }

    #[test]
    fn create_team_with_whitespace_name_fails() {
        assert!(Team::new("   ").is_err());
    }

    #[test]
    fn create_team_with_over_long_name_fails() {
        let result = Team::new("a".repeat(21));
        assert!(matches!(
            result,
            Err(DomainError::FieldTooLong { field: "name", .. })
        ));
    }

    #[test]
    fn create_team_at_max_name_length() {
        assert!(Team::new("a".repeat(20)).is_ok());
    }

    #[test]
    fn record_vote_increments_tally() {
        let mut team = Team::new("pirates").unwrap();
        team.record_vote();
        team.record_vote();

        assert_eq!(team.vote_num(), 2);
    }

    #[test]
    fn soft_delete_keeps_team_data() {
        let mut team = Team::new("pirates").unwrap();
        team.soft_delete();

        assert!(!team.is_active());
        assert!(team.timestamps().deleted_at().is_some());
        assert_eq!(team.name(), "pirates");
    }

    #[test]
    fn teams_get_distinct_ids() {
        let a = Team::new("a").unwrap();
        let b = Team::new("b").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn from_persistence_round_trip() {
        let team = Team::new("pirates").unwrap();
        let restored = Team::from_persistence(
            team.id(),
            team.name().to_string(),
            team.vote_num(),
            team.timestamps().clone(),
        );

        assert_eq!(restored.id(), team.id());
        assert_eq!(restored.name(), team.name());
        assert_eq!(restored.vote_num(), team.vote_num());
    }
}
