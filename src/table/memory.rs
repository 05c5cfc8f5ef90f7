//! # In-Memory Table
//!
//! Process-local table with the same semantics as the managed one:
//! last-write-wins puts, conditional updates, idempotent deletes.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{Item, ItemPatch};

use super::errors::{StorageError, StorageResult};
use super::ItemStore;

/// In-memory coffee table
///
/// Scans return records ordered by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::backend("Lock poisoned")
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn get(&self, id: &str) -> StorageResult<Option<Item>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(id).cloned())
    }

    async fn scan(&self) -> StorageResult<Vec<Item>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.values().cloned().collect())
    }

    async fn put(&self, item: Item) -> StorageResult<Item> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> StorageResult<Item> {
        let mut items = self.items.write().map_err(poisoned)?;

        let item = items
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        item.apply(patch);
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
