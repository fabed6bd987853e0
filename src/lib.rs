//! Demo Day Voting Library
//!
//! This library provides the persistence layer for a demo-day voting
//! application: teams and their members, vote tallies, soft-deletable
//! records, and SQLite-backed repositories.

pub mod auth;
pub mod domain;
pub mod infrastructure;
