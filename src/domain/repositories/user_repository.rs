use async_trait::async_trait;
use thiserror::Error;

use crate::domain::store::StoreError;
use crate::domain::user::{User, UserFields, UserPatch};

/// Errors surfaced by user repositories
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("user not found: {0}")]
    NotFound(u64),

    #[error("no user id available after {0}")]
    IdExhausted(u64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

/// Repository trait for the User collection
///
/// Implementations own not-found semantics. Id uniqueness is the caller's
/// responsibility: `store` appends whatever id it is given.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user, in stored order
    async fn get_all(&self) -> RepositoryResult<Vec<User>>;

    /// Find a user by ID
    async fn get_by_id(&self, id: u64) -> RepositoryResult<User>;

    /// Append a new user with a caller-assigned id
    async fn store(&self, id: u64, created_at: String, fields: UserFields)
        -> RepositoryResult<User>;

    /// Replace all mutable fields of an existing user
    async fn update(&self, id: u64, fields: UserFields) -> RepositoryResult<User>;

    /// Overwrite only the fields present in `patch`
    async fn patch(&self, id: u64, patch: UserPatch) -> RepositoryResult<User>;

    /// Remove a user, keeping the order of the others
    async fn delete(&self, id: u64) -> RepositoryResult<()>;

    /// Highest id present, or 0 when the collection is empty
    async fn last_id(&self) -> RepositoryResult<u64>;
}
