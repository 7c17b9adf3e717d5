//! Item services: registration under the aggregate price rule, and paged search.

mod regist;
mod search;

pub use regist::ItemRegistService;
pub use search::ItemSearchService;
