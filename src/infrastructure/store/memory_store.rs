use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::domain::store::{Store, StoreResult};

/// In-process implementation of Store
///
/// The collection lives only as long as this value; callers that want to
/// share it hand out an `Arc<MemoryStore<T>>`.
#[derive(Debug)]
pub struct MemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store seeded with `items`
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Store<T> for MemoryStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn read(&self) -> StoreResult<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn write(&self, items: &[T]) -> StoreResult<()> {
        *self.items.write().await = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store: MemoryStore<u32> = MemoryStore::new();
        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_items_are_readable() {
        let store = MemoryStore::with_items(vec![3u32, 1, 2]);
        assert_eq!(store.read().await.unwrap(), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn write_replaces_collection() {
        let store = MemoryStore::with_items(vec![1u32, 2]);

        store.write(&[9]).await.unwrap();

        assert_eq!(store.read().await.unwrap(), vec![9]);
    }

    #[tokio::test]
    async fn separate_instances_do_not_share_state() {
        let a: MemoryStore<u32> = MemoryStore::new();
        let b: MemoryStore<u32> = MemoryStore::new();

        a.write(&[1]).await.unwrap();

        assert!(b.read().await.unwrap().is_empty());
    }
}
