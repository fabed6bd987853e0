// User domain module
// Contains the user aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

// Re-export main types for convenience
pub use user::{NewUser, User, MAX_USER_ID_LEN, MAX_USER_NAME_LEN};
pub use value_objects::{Email, Part};
