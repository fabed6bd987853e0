use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum stored length of an email address
pub const MAX_EMAIL_LEN: usize = 30;

/// Email value object representing a valid, normalized email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 and at most 30 characters long
/// - Domain part (after the rightmost '@') is lowercase
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// The input is normalized before validation: surrounding whitespace
    /// is trimmed and the domain part is lowercased. The local part is
    /// left untouched. Normalizing an already-normalized address is a
    /// no-op.
    ///
    /// # Returns
    /// * `Ok(Email)` - If the normalized email is valid
    /// * `Err(DomainError)` - If the email is invalid or over-long
    ///
    /// # Example
    /// ```
    /// use demoday::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("Alice@EXAMPLE.com").expect("valid email");
    /// assert_eq!(email.as_str(), "Alice@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = Self::normalize(email.as_ref());

        if !normalized.contains('@') || normalized.len() < 3 {
            return Err(DomainError::InvalidEmail(normalized));
        }
        if normalized.len() > MAX_EMAIL_LEN {
            return Err(DomainError::FieldTooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        Ok(Email(normalized))
    }

    /// Canonicalizes an email string
    ///
    /// Trims whitespace and lowercases everything after the rightmost
    /// '@'. Idempotent.
    fn normalize(email: &str) -> String {
        let email = email.trim();
        match email.rsplit_once('@') {
            Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
            None => email.to_string(),
        }
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sub-team specialization a user belongs to
///
/// Stored as lowercase text ("front" / "back").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// Front-end
    Front,
    /// Back-end
    Back,
}

impl FromStr for Part {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Part::Front),
            "back" => Ok(Part::Back),
            other => Err(DomainError::UnknownPart(other.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Front => write!(f, "front"),
            Part::Back => write!(f, "back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_with_subdomain() {
        assert!(Email::new("user@mail.example.com").is_ok());
    }

    #[test]
    fn valid_email_minimum_length() {
        assert!(Email::new("a@b").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn invalid_email_empty() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn email_over_max_length_rejected() {
        let long = format!("{}@example.com", "a".repeat(30));
        assert!(matches!(
            Email::new(long),
            Err(DomainError::FieldTooLong { field: "email", .. })
        ));
    }

    #[test]
    fn email_domain_is_lowercased() {
        let email = Email::new("User@EXAMPLE.COM").unwrap();
        assert_eq!(email.as_str(), "User@example.com");
    }

    #[test]
    fn email_local_part_is_preserved() {
        let email = Email::new("MixedCase@example.com").unwrap();
        assert_eq!(email.as_str(), "MixedCase@example.com");
    }

    #[test]
    fn email_normalization_is_idempotent() {
        let once = Email::new(" User@EXAMPLE.com ").unwrap();
        let twice = Email::new(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }

    #[test]
    fn part_parses_known_values() {
        assert_eq!("front".parse::<Part>().unwrap(), Part::Front);
        assert_eq!("back".parse::<Part>().unwrap(), Part::Back);
    }

    #[test]
    fn part_parse_is_case_insensitive() {
        assert_eq!("Front".parse::<Part>().unwrap(), Part::Front);
        assert_eq!("BACK".parse::<Part>().unwrap(), Part::Back);
    }

    #[test]
    fn part_rejects_unknown_values() {
        assert!(matches!(
            "middle".parse::<Part>(),
            Err(DomainError::UnknownPart(_))
        ));
    }

    #[test]
    fn part_display() {
        assert_eq!(Part::Front.to_string(), "front");
        assert_eq!(Part::Back.to_string(), "back");
    }
}
