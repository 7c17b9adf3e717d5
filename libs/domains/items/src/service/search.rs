use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{BusinessError, ItemResult};
use crate::messages::MessageId;
use crate::models::{Item, ItemSearchCriteria, Page};
use crate::policy::MAX_SEARCH_RESULTS;
use crate::repository::ItemRepository;

/// Paged item search guarded by a result-count check.
pub struct ItemSearchService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemSearchService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Count the matches first; fetch the page only when the count is in range.
    ///
    /// # Errors
    ///
    /// - `ME003` when nothing matches
    /// - `ME002` when more than [`MAX_SEARCH_RESULTS`] rows match
    #[instrument(skip(self), fields(page = criteria.page.number, size = criteria.page.size.get()))]
    pub async fn find_all(&self, criteria: &ItemSearchCriteria) -> ItemResult<Page<Item>> {
        let total = self.repository.count_all(criteria).await?;

        if total == 0 {
            info!("No items matched");
            return Err(BusinessError::global(MessageId::Me003).into());
        }
        if total > MAX_SEARCH_RESULTS {
            info!(total, "Search matched too many items");
            return Err(BusinessError::global(MessageId::Me002).into());
        }

        let content = self.repository.find_all(criteria).await?;
        info!(total, returned = content.len(), "Search completed");
        Ok(Page::new(content, &criteria.page, total))
    }
}

impl<R: ItemRepository> Clone for ItemSearchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
