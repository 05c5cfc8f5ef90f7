//! # Key-Value Table Access
//!
//! The coffee table is an external key-value store keyed by `id`. This
//! module is the only place that talks to it.
//!
//! - [`ItemStore`] is the seam: point get, point put, conditional
//!   partial update, point delete and full scan.
//! - [`operation`] holds one descriptor per primitive. Handlers build a
//!   descriptor and execute it exactly once.
//! - [`shared`] owns the process-wide store handle.
//!
//! Backends: [`MemoryStore`] for local serving and tests, and
//! `DynamoStore` (feature `dynamodb`) for the managed table.

mod config;
mod errors;
mod memory;
pub mod operation;
pub mod shared;

#[cfg(feature = "dynamodb")]
mod dynamodb;

use async_trait::async_trait;

use crate::model::{Item, ItemPatch};

pub use config::{StorageBackend, StorageConfig};
pub use errors::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use operation::{DeleteItem, GetItem, PutItem, ScanItems, StoreOperation, UpdateItem};
pub use shared::SharedStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoStore;

/// Primitives offered by the coffee table
///
/// Implementations must be safe to share across concurrent requests.
/// No implementation retries; the first failure is returned as is.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Point read by primary key
    async fn get(&self, id: &str) -> StorageResult<Option<Item>>;

    /// Read every record in the table
    async fn scan(&self) -> StorageResult<Vec<Item>>;

    /// Write the full record, replacing any record with the same id
    async fn put(&self, item: Item) -> StorageResult<Item>;

    /// Set the patched fields on an existing record and return the result.
    ///
    /// Fails with [`StorageError::NotFound`] when the id is absent; an
    /// update never creates a record.
    async fn update(&self, id: &str, patch: &ItemPatch) -> StorageResult<Item>;

    /// Remove the record if present. Deleting a missing id succeeds.
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}
