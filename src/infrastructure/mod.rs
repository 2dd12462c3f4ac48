// Infrastructure layer module
// Contains persistence adapters for the domain ports
// Follows Hexagonal Architecture

pub mod repositories;
pub mod store;
