// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod error;
pub mod repositories;
pub mod team;
pub mod timestamps;
pub mod user;

pub use error::DomainError;
