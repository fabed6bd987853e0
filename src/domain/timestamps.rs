use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record lifecycle timestamps shared by all persistent entities
///
/// Implements soft deletion: records are stamped with `deleted_at`
/// instead of being removed from storage.
///
/// # Invariants
/// - `created_at` is set once at construction and never changes
/// - `updated_at` is refreshed on every mutation
/// - `deleted_at` is `None` exactly while the record is active
///
/// # Example
/// ```
/// use demoday::domain::timestamps::Timestamps;
///
/// let mut ts = Timestamps::now();
/// assert!(ts.is_active());
///
/// ts.mark_deleted();
/// assert!(!ts.is_active());
/// assert!(ts.deleted_at().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Creates timestamps for a freshly constructed record
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Refreshes `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Stamps the record as deleted
    ///
    /// Calling this twice re-stamps `deleted_at`; callers that need
    /// idempotence must check `is_active` first.
    pub fn mark_deleted(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Returns true while the record has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the deletion timestamp if the record was soft-deleted
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Reconstructs timestamps from persistence layer data
    pub fn from_persistence(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            updated_at,
            deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timestamps_are_active() {
        let ts = Timestamps::now();
        assert!(ts.is_active());
        assert!(ts.deleted_at().is_none());
        assert_eq!(ts.created_at(), ts.updated_at());
    }

    #[test]
    fn mark_deleted_sets_deleted_at() {
        let mut ts = Timestamps::now();
        ts.mark_deleted();

        assert!(!ts.is_active());
        assert!(ts.deleted_at().is_some());
        assert_eq!(ts.deleted_at().unwrap(), ts.updated_at());
    }

    #[test]
    fn mark_deleted_twice_restamps() {
        let mut ts = Timestamps::now();
        ts.mark_deleted();
        let first = ts.deleted_at().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        ts.mark_deleted();
        let second = ts.deleted_at().unwrap();

        assert!(second > first);
    }

    #[test]
    fn touch_refreshes_updated_at_only() {
        let mut ts = Timestamps::now();
        let created = ts.created_at();

        std::thread::sleep(std::time::Duration::from_millis(5));
        ts.touch();

        assert_eq!(ts.created_at(), created);
        assert!(ts.updated_at() > created);
        assert!(ts.is_active());
    }
}
