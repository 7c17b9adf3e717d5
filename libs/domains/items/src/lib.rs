//! Items Domain
//!
//! Registration and search of catalog items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, form validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Services   │  ← Aggregate price rule, search result limits
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, forms, criteria, pages
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_items::{
//!     InMemoryItemRepository, ItemRegistService, ItemSearchService, RegistrationPolicy,
//!     handlers,
//! };
//!
//! let repository = Arc::new(InMemoryItemRepository::new());
//! let regist = ItemRegistService::new(Arc::clone(&repository), RegistrationPolicy::default());
//! let search = ItemSearchService::new(repository);
//!
//! let router = handlers::router(regist, search);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod messages;
pub mod models;
pub mod policy;
pub mod repository;
pub mod service;

pub use error::{BusinessError, ItemError, ItemResult, StoreError, StoreResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use messages::MessageId;
pub use models::{
    GroupOption, Item, ItemConfirmation, ItemForm, ItemGroup, ItemSearchCriteria, ItemSearchForm,
    Page, PageRequest,
};
pub use policy::{AGGREGATE_PRICE_LIMIT, MAX_SEARCH_RESULTS, RegistrationPolicy};
pub use repository::ItemRepository;
pub use service::{ItemRegistService, ItemSearchService};
