use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::repositories::user_repository::{
    RepositoryError, RepositoryResult, UserRepository,
};
use crate::domain::store::Store;
use crate::domain::user::{User, UserFields, UserPatch};

/// Store-backed implementation of UserRepository
///
/// Each call reads the whole collection, and mutations write the whole
/// collection back. Nothing is cached between calls. Mutations made through
/// one instance are serialized by `write_lock`; other processes sharing the
/// same file still race with last writer wins.
pub struct StoreUserRepository {
    store: Arc<dyn Store<User>>,
    write_lock: Mutex<()>,
}

impl StoreUserRepository {
    /// Creates a new StoreUserRepository over `store`
    pub fn new(store: Arc<dyn Store<User>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

fn position(users: &[User], id: u64) -> RepositoryResult<usize> {
    users
        .iter()
        .position(|user| user.id == id)
        .ok_or(RepositoryError::NotFound(id))
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.store.read().await?)
    }

    async fn get_by_id(&self, id: u64) -> RepositoryResult<User> {
        self.store
            .read()
            .await?
            .into_iter()
            .find(|user| user.id == id)
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn store(
        &self,
        id: u64,
        created_at: String,
        fields: UserFields,
    ) -> RepositoryResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.store.read().await?;
        let user = User::new(id, created_at, fields);
        users.push(user.clone());
        self.store.write(&users).await?;

        tracing::debug!(user_id = id, "user stored");
        Ok(user)
    }

    async fn update(&self, id: u64, fields: UserFields) -> RepositoryResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.store.read().await?;
        let index = position(&users, id)?;
        users[index].replace_fields(fields);
        self.store.write(&users).await?;

        tracing::debug!(user_id = id, "user updated");
        Ok(users.swap_remove(index))
    }

    async fn patch(&self, id: u64, patch: UserPatch) -> RepositoryResult<User> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.store.read().await?;
        let index = position(&users, id)?;
        users[index].apply_patch(patch);
        self.store.write(&users).await?;

        tracing::debug!(user_id = id, "user patched");
        Ok(users.swap_remove(index))
    }

    async fn delete(&self, id: u64) -> RepositoryResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.store.read().await?;
        let index = position(&users, id)?;
        users.remove(index);
        self.store.write(&users).await?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }

    async fn last_id(&self) -> RepositoryResult<u64> {
        let users = self.store.read().await?;
        Ok(users.iter().map(|user| user.id).max().unwrap_or(0))
    }
}
