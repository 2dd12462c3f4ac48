// Repository ports (driven side of the hexagon)

pub mod user_repository;

pub use user_repository::{RepositoryError, RepositoryResult, UserRepository};
