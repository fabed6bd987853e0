// Infrastructure layer module
// Contains database adapters implementing the domain repository ports
// Follows Hexagonal Architecture

pub mod db;
pub mod repositories;
