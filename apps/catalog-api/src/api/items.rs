//! Items API routes

use axum::Router;
use domain_items::{ItemRegistService, ItemSearchService, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    let regist = ItemRegistService::new(
        Arc::clone(&state.repository),
        state.config.items.policy(),
    );
    let search = ItemSearchService::new(Arc::clone(&state.repository));

    handlers::router(regist, search)
}
