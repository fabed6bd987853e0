// Authentication support
// Only password hashing lives here; session and token handling belong
// to the embedding application

pub mod password;
