//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use things_core::item::{Item, ItemUpdate};
use things_core::storage::{ItemRepository, Result};

type Partition = BTreeMap<String, Item>;

/// In-memory storage backend for testing and local development.
///
/// Items are grouped by partition key and ordered by sort key, matching the
/// order a DynamoDB query returns them in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    partitions: Arc<RwLock<BTreeMap<String, Partition>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn query_items(&self, pk: &str) -> Result<Vec<Item>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(pk)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get_item(&self, pk: &str, sk: &str) -> Result<Option<Item>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(pk)
            .and_then(|partition| partition.get(sk))
            .cloned())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(item.pk.clone())
            .or_default()
            .insert(item.sk.clone(), item.clone());
        Ok(())
    }

    async fn update_item(&self, pk: &str, sk: &str, update: &ItemUpdate) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        let item = partitions
            .entry(pk.to_string())
            .or_default()
            .entry(sk.to_string())
            .or_insert_with(|| Item::new(pk, sk));

        item.description = update.description.clone();
        item.other_attr = update.other_attr.clone();
        Ok(())
    }

    async fn put_translation(
        &self,
        pk: &str,
        sk: &str,
        language: &str,
        text: &str,
    ) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(pk.to_string())
            .or_default()
            .entry(sk.to_string())
            .or_insert_with(|| Item::new(pk, sk))
            .translations
            .insert(language.to_string(), text.to_string());
        Ok(())
    }
}
