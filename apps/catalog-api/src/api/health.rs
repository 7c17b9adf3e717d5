//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use domain_items::{ItemRepository, ItemSearchCriteria, PageRequest};
use serde::Serialize;
use std::num::NonZeroU32;
use tracing::warn;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: bool,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies the item store answers a count
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let probe = ItemSearchCriteria::new(None, None, PageRequest::new(0, NonZeroU32::MIN));

    match state.repository.count_all(&probe).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                store: true,
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Item store not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unhealthy",
                    store: false,
                }),
            )
        }
    }
}
