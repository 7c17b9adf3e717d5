//! In-process [`ItemRepository`] backed by an ordered map.
//!
//! Filter semantics: `item_name` matches as a substring, `price` exactly.
//! Results are ordered by id.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{StoreError, StoreResult};
use crate::models::{Item, ItemSearchCriteria};
use crate::repository::ItemRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<i32, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `items`; later duplicates of an id win.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn matches_criteria(item: &Item, criteria: &ItemSearchCriteria) -> bool {
    let name_matches = criteria
        .item_name
        .as_deref()
        .is_none_or(|name| item.item_name.contains(name));
    let price_matches = criteria.price.is_none_or(|price| item.price == Some(price));
    name_matches && price_matches
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all_by_item_name(&self, item_name: &str) -> StoreResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.item_name == item_name)
            .cloned()
            .collect())
    }

    async fn insert_item(&self, item: &Item) -> StoreResult<u64> {
        let mut items = self.items.write().await;
        match items.entry(item.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(format!("item id {}", item.id))),
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
                debug!(item_id = item.id, "Inserted item");
                Ok(1)
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn count_all(&self, criteria: &ItemSearchCriteria) -> StoreResult<u64> {
        let items = self.items.read().await;
        let count = items.values().filter(|item| matches_criteria(item, criteria)).count();
        Ok(count as u64)
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_all(&self, criteria: &ItemSearchCriteria) -> StoreResult<Vec<Item>> {
        let offset = usize::try_from(criteria.page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(criteria.page.size.get()).unwrap_or(usize::MAX);

        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| matches_criteria(item, criteria))
            .skip(offset)
            .take(size)
            .cloned()
            .collect())
    }
}
