//! User use-case service.
//!
//! Delegates every operation to a `UserRepository`. Creation additionally
//! assigns `id = last_id + 1` and stamps `created_at` with the current UTC
//! time. Repository errors are returned unchanged.
//!
//! # Invariants
//! - Creations through clones of one `UserService` are serialized, so the
//!   `last_id` read and the append that uses it never interleave with
//!   another creation.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::repositories::{RepositoryError, RepositoryResult, UserRepository};
use crate::domain::user::{User, UserFields, UserPatch};

/// Format used for `created_at` timestamps
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %:z";

/// Renders a creation timestamp in the persisted string format
pub fn format_created_at(at: DateTime<Utc>) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}

/// Use-case service wrapper for user CRUD operations
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    create_lock: Arc<Mutex<()>>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> RepositoryResult<User> {
        self.repository.get_by_id(id).await
    }

    /// Creates a user with the next id and a fresh `created_at`
    ///
    /// Ids come from the current maximum, so an id freed by deleting the
    /// newest user is handed out again.
    pub async fn store(&self, fields: UserFields) -> RepositoryResult<User> {
        let _guard = self.create_lock.lock().await;

        let last_id = self.repository.last_id().await?;
        let id = last_id
            .checked_add(1)
            .ok_or(RepositoryError::IdExhausted(last_id))?;
        let created_at = format_created_at(Utc::now());

        let user = self.repository.store(id, created_at, fields).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    pub async fn update(&self, id: u64, fields: UserFields) -> RepositoryResult<User> {
        self.repository.update(id, fields).await
    }

    pub async fn patch(&self, id: u64, patch: UserPatch) -> RepositoryResult<User> {
        self.repository.patch(id, patch).await
    }

    pub async fn delete(&self, id: u64) -> RepositoryResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
