use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Item, ItemSearchCriteria};

/// Data access for catalog items.
///
/// Implementations report a unique-key collision on insert as
/// [`StoreError::DuplicateKey`](crate::error::StoreError::DuplicateKey) so the
/// registration service can turn it into a user message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items whose name equals `item_name` exactly
    async fn find_all_by_item_name(&self, item_name: &str) -> StoreResult<Vec<Item>>;

    /// Persist a new item, returning the affected row count
    async fn insert_item(&self, item: &Item) -> StoreResult<u64>;

    /// Number of items matching the criteria filter, ignoring the page window
    async fn count_all(&self, criteria: &ItemSearchCriteria) -> StoreResult<u64>;

    /// The criteria's page of matching items, ordered by id
    async fn find_all(&self, criteria: &ItemSearchCriteria) -> StoreResult<Vec<Item>>;
}
