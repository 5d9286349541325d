use async_trait::async_trait;

use crate::item::{Item, ItemUpdate};

use super::Result;

/// Access to the keyed item store.
///
/// Writes are unconditional: none of these operations check whether the item
/// already exists.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets every item in a partition, in sort key order.
    async fn query_items(&self, pk: &str) -> Result<Vec<Item>>;

    /// Gets a single item by its keys.
    async fn get_item(&self, pk: &str, sk: &str) -> Result<Option<Item>>;

    /// Writes an item, replacing any existing item with the same keys.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Overwrites `description` and `otherAttr`, creating the item if absent.
    async fn update_item(&self, pk: &str, sk: &str, update: &ItemUpdate) -> Result<()>;

    /// Sets the cached translation for one language, leaving every other
    /// attribute untouched.
    async fn put_translation(&self, pk: &str, sk: &str, language: &str, text: &str)
        -> Result<()>;
}
