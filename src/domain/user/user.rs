use crate::auth::password::hash_password;
use crate::domain::error::DomainError;
use crate::domain::timestamps::Timestamps;
use crate::domain::user::value_objects::{Email, Part};
use serde::Deserialize;
use uuid::Uuid;

/// Maximum length of a user id
pub const MAX_USER_ID_LEN: usize = 10;

/// Maximum length of a user's display name
pub const MAX_USER_NAME_LEN: usize = 10;

/// Input for creating a user account
///
/// Mirrors the shape of a registration form: every field arrives as
/// caller-supplied text and is validated by [`User::create`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub team_id: Option<Uuid>,
    pub email: String,
    pub part: String,
    pub name: String,
    pub password: Option<String>,
}

/// User aggregate root
///
/// An individual account tied to exactly one team and one part
/// (front/back), carrying voting-status flags and a personal vote
/// tally.
///
/// # Invariants
/// - id, team, email, part, and name are mandatory and non-empty
/// - id and name are at most 10 characters, email at most 30
/// - Email is normalized and unique across users (enforced in storage)
/// - Plaintext passwords are never stored, only bcrypt hashes
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    team_id: Uuid,
    email: Email,
    part: Part,
    name: String,
    password_hash: Option<String>,
    part_voted: bool,
    demo_voted: bool,
    vote_num: i32,
    timestamps: Timestamps,
}

impl User {
    /// Validates input and constructs a new User
    ///
    /// Each missing required field fails with its own error. The email
    /// is normalized before storage and the password, when present, is
    /// hashed with bcrypt; an account created without a password can
    /// never authenticate.
    ///
    /// # Returns
    /// * `Ok(User)` - With part_voted = false, demo_voted = false and
    ///   vote_num = 0
    /// * `Err(DomainError)` - Naming the first violated precondition
    pub fn create(new: NewUser) -> Result<Self, DomainError> {
        if new.id.trim().is_empty() {
            return Err(DomainError::MissingId);
        }
        let team_id = new.team_id.ok_or(DomainError::MissingTeam)?;
        if new.email.trim().is_empty() {
            return Err(DomainError::MissingEmail);
        }
        if new.part.trim().is_empty() {
            return Err(DomainError::MissingPart);
        }
        if new.name.trim().is_empty() {
            return Err(DomainError::MissingName);
        }

        if new.id.len() > MAX_USER_ID_LEN {
            return Err(DomainError::FieldTooLong {
                field: "id",
                max: MAX_USER_ID_LEN,
            });
        }
        if new.name.len() > MAX_USER_NAME_LEN {
            return Err(DomainError::FieldTooLong {
                field: "name",
                max: MAX_USER_NAME_LEN,
            });
        }

        let email = Email::new(&new.email)?;
        let part: Part = new.part.parse()?;
        let password_hash = new
            .password
            .as_deref()
            .map(hash_password)
            .transpose()
            .map_err(DomainError::PasswordHash)?;

        Ok(Self {
            id: new.id,
            team_id,
            email,
            part,
            name: new.name,
            password_hash,
            part_voted: false,
            demo_voted: false,
            vote_num: 0,
            timestamps: Timestamps::now(),
        })
    }

    /// Marks the user as having cast their part-category vote
    pub fn record_part_vote(&mut self) {
        self.part_voted = true;
        self.timestamps.touch();
    }

    /// Marks the user as having cast their demo vote
    pub fn record_demo_vote(&mut self) {
        self.demo_voted = true;
        self.timestamps.touch();
    }

    /// Adds one vote to the user's personal tally
    pub fn add_vote(&mut self) {
        self.vote_num += 1;
        self.timestamps.touch();
    }

    /// Stamps the user as deleted without removing the record
    pub fn soft_delete(&mut self) {
        self.timestamps.mark_deleted();
    }

    /// Returns true while the user has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.timestamps.is_active()
    }

    // ===== Getters =====

    /// Returns the user's id (the login identifier)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ID of the team this user belongs to
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    /// Returns the user's email
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the user's part
    pub fn part(&self) -> Part {
        self.part
    }

    /// Returns the user's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored bcrypt hash, if a password was set
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    /// Returns whether the user already voted in the part category
    pub fn part_voted(&self) -> bool {
        self.part_voted
    }

    /// Returns whether the user already voted in the demo category
    pub fn demo_voted(&self) -> bool {
        self.demo_voted
    }

    /// Returns the user's personal vote tally
    pub fn vote_num(&self) -> i32 {
        self.vote_num
    }

    /// Returns the record lifecycle timestamps
    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    /// Reconstructs a User from persistence layer data
    ///
    /// Bypasses validation since the data was validated before it was
    /// stored. Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: String,
        team_id: Uuid,
        email: Email,
        part: Part,
        name: String,
        password_hash: Option<String>,
        part_voted: bool,
        demo_voted: bool,
        vote_num: i32,
        timestamps: Timestamps,
    ) -> Self {
        Self {
            id,
            team_id,
            email,
            part,
            name,
            password_hash,
            part_voted,
            demo_voted,
            vote_num,
            timestamps,
        }
    }
}
