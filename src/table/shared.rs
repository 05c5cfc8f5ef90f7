//! # Shared Store Handle
//!
//! One table client per process. The handle is built on first use by
//! [`init`] during boot and then handed to the gateway; request handlers
//! only ever borrow it. [`connect`] builds a fresh handle without touching
//! the process-wide one, which is what tests use.

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::config::{StorageBackend, StorageConfig};
use super::errors::StorageResult;
use super::memory::MemoryStore;
use super::ItemStore;

/// Reference-counted store handle, safe to share across requests
pub type SharedStore = Arc<dyn ItemStore>;

static STORE: OnceCell<SharedStore> = OnceCell::const_new();

/// Initialise the process-wide store, or return it if already built.
///
/// Concurrent callers wait for the same initialisation. A failed
/// initialisation leaves the cell empty so a later call can retry.
pub async fn init(config: &StorageConfig) -> StorageResult<SharedStore> {
    STORE.get_or_try_init(|| connect(config)).await.cloned()
}

/// Build a new store handle for `config`
pub async fn connect(config: &StorageConfig) -> StorageResult<SharedStore> {
    config.validate()?;

    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::Dynamodb => connect_dynamodb(config).await,
    }
}

#[cfg(feature = "dynamodb")]
async fn connect_dynamodb(config: &StorageConfig) -> StorageResult<SharedStore> {
    let store = super::dynamodb::DynamoStore::connect(config).await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "dynamodb"))]
async fn connect_dynamodb(_config: &StorageConfig) -> StorageResult<SharedStore> {
    Err(super::errors::StorageError::Config(
        "backend 'dynamodb' requires building with the 'dynamodb' feature".into(),
    ))
}
