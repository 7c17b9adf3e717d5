use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::error::{BusinessError, ItemResult, StoreError};
use crate::messages::MessageId;
use crate::models::Item;
use crate::policy::RegistrationPolicy;
use crate::repository::ItemRepository;

/// Registers new items.
///
/// Before inserting, the prices of every stored item sharing the new item's
/// name are summed with the new price (missing prices count as 0). If the
/// item's group is restricted and the total reaches the limit, the item is
/// refused with `ME001`.
pub struct ItemRegistService<R: ItemRepository> {
    repository: Arc<R>,
    policy: RegistrationPolicy,
}

impl<R: ItemRepository> ItemRegistService<R> {
    pub fn new(repository: Arc<R>, policy: RegistrationPolicy) -> Self {
        Self { repository, policy }
    }

    /// Register `item`.
    ///
    /// # Errors
    ///
    /// - `ME001` (global) when the aggregate price rule refuses the item
    /// - `ME004` on `id` when the id is already taken
    /// - [`ItemError::Store`](crate::error::ItemError::Store) for any other store failure
    #[instrument(
        skip(self, item),
        fields(item_id = item.id, item_name = %item.item_name, group_id = %item.group_id)
    )]
    pub async fn regist_item(&self, item: &Item) -> ItemResult<()> {
        let same_name = self
            .repository
            .find_all_by_item_name(&item.item_name)
            .await?;

        let aggregate_price = same_name
            .iter()
            .chain(std::iter::once(item))
            .map(|existing| i64::from(existing.price.unwrap_or(0)))
            .sum::<i64>();

        if self.policy.is_restricted(&item.group_id) && self.policy.reaches_limit(aggregate_price)
        {
            info!(aggregate_price, "Aggregate price limit reached");
            return Err(BusinessError::global(MessageId::Me001).into());
        }

        match self.repository.insert_item(item).await {
            Ok(rows) => {
                info!(rows, "Item registered");
                Ok(())
            }
            Err(err @ StoreError::DuplicateKey(_)) => {
                info!(error = %err, "Item id already registered");
                Err(BusinessError::field(MessageId::Me004, "id")
                    .with_source(err)
                    .into())
            }
            Err(err) => {
                error!(error = %err, "Failed to insert item");
                Err(err.into())
            }
        }
    }
}

impl<R: ItemRepository> Clone for ItemRegistService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: self.policy.clone(),
        }
    }
}
