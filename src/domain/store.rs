use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Failure while reading or writing a persisted collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection persistence port
///
/// Every call round-trips the entire collection. There are no partial
/// reads or writes, and `write` replaces everything previously stored.
#[async_trait]
pub trait Store<T>: Send + Sync
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Loads the full persisted collection
    async fn read(&self) -> StoreResult<Vec<T>>;

    /// Persists `items` as the new full collection
    async fn write(&self, items: &[T]) -> StoreResult<()>;
}
