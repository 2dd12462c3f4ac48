use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::domain::store::Store;
use crate::domain::user::User;
use crate::infrastructure::repositories::StoreUserRepository;
use crate::infrastructure::store::{FileStore, MemoryStore};
use crate::service::UserService;

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
    pub token: Arc<str>,
}

impl AppState {
    pub fn new(service: UserService, token: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            token: token.into(),
        }
    }

    /// Wires store, repository and service for the configured backend
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn Store<User>> = match config.store_backend {
            StoreBackend::File => {
                tracing::info!(path = %config.users_file.display(), "using file store");
                Arc::new(FileStore::new(&config.users_file))
            }
            StoreBackend::Memory => {
                tracing::info!("using in-memory store");
                Arc::new(MemoryStore::<User>::new())
            }
        };

        let repository = Arc::new(StoreUserRepository::new(store));
        Self::new(UserService::new(repository), config.token.as_str())
    }
}
