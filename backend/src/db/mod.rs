//! Database connection and repositories

pub mod collections;
pub mod media;
pub mod memory;
pub mod mongo;
pub mod store;

use std::sync::Arc;

pub use collections::{CollectionInput, CollectionRecord, CollectionRepository};
pub use media::{MediaFields, MediaRecord, MediaRepository};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreError, StoreResult};

use crate::config::{Config, StoreBackend};

/// Handle to the document store, shared by every request.
///
/// Cloning is cheap; all clones talk to the same underlying connection.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
}

impl Database {
    /// Wrap an existing store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// A database backed by a fresh in-process store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open the store selected by the configuration and verify it answers
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let db = match config.store_backend {
            StoreBackend::MongoDb => {
                let store = MongoStore::connect(&config.mongodb_uri, &config.database_name).await?;
                Self::new(Arc::new(store))
            }
            StoreBackend::Memory => Self::in_memory(),
        };

        db.store.ping().await?;
        tracing::info!(backend = db.store.backend(), "Database connected");
        Ok(db)
    }

    /// Close the underlying connection. Call once, after the server has stopped.
    pub async fn close(&self) {
        self.store.close().await;
        tracing::info!(backend = self.store.backend(), "Database connection closed");
    }

    /// Get a media repository
    pub fn media(&self) -> MediaRepository {
        MediaRepository::new(self.store.clone())
    }

    /// Get a collections repository
    pub fn collections(&self) -> CollectionRepository {
        CollectionRepository::new(self.store.clone())
    }
}
