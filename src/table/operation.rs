//! # Table Operations
//!
//! One descriptor per table primitive. A descriptor holds its inputs and
//! forwards to the matching [`ItemStore`] method; it adds no logic of its
//! own. Executing consumes the descriptor, so each one reaches the table
//! at most once.

use async_trait::async_trait;

use crate::model::{Item, ItemPatch};

use super::errors::StorageResult;
use super::ItemStore;

/// A single table call
#[async_trait]
pub trait StoreOperation: Send + Sized {
    type Output: Send;

    /// Issue the call against `store`
    async fn execute(self, store: &dyn ItemStore) -> StorageResult<Self::Output>;
}

/// Point read by id
#[derive(Debug, Clone)]
pub struct GetItem {
    pub id: String,
}

impl GetItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl StoreOperation for GetItem {
    type Output = Option<Item>;

    async fn execute(self, store: &dyn ItemStore) -> StorageResult<Option<Item>> {
        store.get(&self.id).await
    }
}

/// Full-table scan
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanItems;

#[async_trait]
impl StoreOperation for ScanItems {
    type Output = Vec<Item>;

    async fn execute(self, store: &dyn ItemStore) -> StorageResult<Vec<Item>> {
        store.scan().await
    }
}

/// Full-record write (upsert)
#[derive(Debug, Clone)]
pub struct PutItem {
    pub item: Item,
}

impl PutItem {
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

#[async_trait]
impl StoreOperation for PutItem {
    type Output = Item;

    async fn execute(self, store: &dyn ItemStore) -> StorageResult<Item> {
        store.put(self.item).await
    }
}

/// Partial update of an existing record
#[derive(Debug, Clone)]
pub struct UpdateItem {
    pub id: String,
    pub patch: ItemPatch,
}

impl UpdateItem {
    pub fn new(id: impl Into<String>, patch: ItemPatch) -> Self {
        Self {
            id: id.into(),
            patch,
        }
    }
}

#[async_trait]
impl StoreOperation for UpdateItem {
    type Output = Item;

    async fn execute(self, store: &dyn ItemStore) -> StorageResult<Item> {
        store.update(&self.id, &self.patch).await
    }
}

/// Point delete by id
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub id: String,
}

impl DeleteItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl StoreOperation for DeleteItem {
    type Output = ();

    async fn execute(self, store: &dyn ItemStore) -> StorageResult<()> {
        store.delete(&self.id).await
    }
}
