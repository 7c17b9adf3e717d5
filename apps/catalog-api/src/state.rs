//! Application state management.

use domain_items::InMemoryItemRepository;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Cloned into each router; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Item store shared by the registration and search services
    pub repository: Arc<InMemoryItemRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            repository: Arc::new(InMemoryItemRepository::new()),
        }
    }
}
