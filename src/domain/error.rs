use thiserror::Error;

/// Validation errors raised while constructing domain records
///
/// Each missing required field gets its own variant so callers can
/// surface a distinct message per field.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Users must have an id")]
    MissingId,

    #[error("Users require a team")]
    MissingTeam,

    #[error("Users require an email")]
    MissingEmail,

    #[error("Users require a part")]
    MissingPart,

    #[error("Users require a name")]
    MissingName,

    #[error("Teams require a name")]
    MissingTeamName,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Unknown part: {0} (expected 'front' or 'back')")]
    UnknownPart(String),

    #[error("Field '{field}' exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_messages_are_distinct() {
        let messages = [
            DomainError::MissingId.to_string(),
            DomainError::MissingTeam.to_string(),
            DomainError::MissingEmail.to_string(),
            DomainError::MissingPart.to_string(),
            DomainError::MissingName.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn field_too_long_names_the_field() {
        let err = DomainError::FieldTooLong {
            field: "name",
            max: 10,
        };
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("10"));
    }
}
