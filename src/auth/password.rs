// Password hashing utilities
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Returns
/// * `Ok(String)` - The bcrypt hash
/// * `Err(BcryptError)` - If hashing fails
///
/// # Example
/// ```
/// use demoday::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// ```
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verifies a password against a bcrypt hash
///
/// # Arguments
/// * `password` - The plaintext password to verify
/// * `hash` - The bcrypt hash to verify against
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(BcryptError)` - If verification fails
///
/// # Example
/// ```
/// use demoday::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("my_password").unwrap();
/// let valid = verify_password("my_password", &hash).unwrap();
/// assert!(valid);
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).expect("valid hash");

        let valid = verify_password(password, &hash).expect("valid verification");
        assert!(valid);
    }

    #[test]
    fn verify_wrong_password() {
        let password = "test_password_123";
        let hash = hash_password(password).expect("valid hash");

        let valid = verify_password("wrong_password", &hash).expect("valid verification");
        assert!(!valid);
    }

    #[test]
    fn hash_different_outputs() {
        let password = "test_password_123";
        let hash1 = hash_password(password).expect("valid hash");
        let hash2 = hash_password(password).expect("valid hash");

        // Hashes should be different due to salt
        assert_ne!(hash1, hash2);

        // But both should verify the password
        assert!(verify_password(password, &hash1).unwrap());
        assert!(verify_password(password, &hash2).unwrap());
    }
}
