//! API routes module
//!
//! This module defines all HTTP API routes of the catalog API.

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, ItemsConfig};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt; // For oneshot()

    fn config(restricted_groups: &[&str]) -> Config {
        Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            items: ItemsConfig {
                restricted_groups: restricted_groups.iter().map(|g| g.to_string()).collect(),
            },
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    fn app(state: &AppState) -> Router {
        axum_helpers::create_router::<ApiDoc>(
            routes(state),
            state.config.app,
            &state.config.cors_allowed_origins,
        )
        .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn register(id: i32, group_id: &str, price: i32) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/items")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "id": id,
                    "item_name": "Pen",
                    "price": price,
                    "group_id": group_id,
                    "regist_date": "2023-10-01"
                })
                .to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_then_search() {
        let state = AppState::new(config(&["CD-A01"]));
        let app = app(&state);

        let created = app.clone().oneshot(register(1, "CD-A01", 1500)).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        assert!(created.headers().contains_key("x-request-id"));

        let found = app
            .oneshot(
                Request::builder()
                    .uri("/api/items/search?item_name=Pen")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(found.status(), StatusCode::OK);
        let page = json_body(found).await;
        assert_eq!(page["total_elements"], 1);
        assert_eq!(page["content"][0]["regist_date"], "2023-10-01");
    }

    #[tokio::test]
    async fn test_configured_groups_drive_the_limit() {
        let state = AppState::new(config(&["CD-A02"]));
        let app = app(&state);

        for id in 1..=3 {
            let response = app.clone().oneshot(register(id, "CD-A02", 1000)).await.unwrap();
            let expected = if id < 3 {
                StatusCode::CREATED
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            assert_eq!(response.status(), expected, "item {id}");
        }

        // Stationery is no longer restricted, so the totals do not matter.
        for id in 4..=6 {
            let response = app.clone().oneshot(register(id, "CD-A01", 1000)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED, "item {id}");
        }
    }

    #[tokio::test]
    async fn test_health_carries_request_id() {
        let state = AppState::new(config(&["CD-A01"]));

        let response = app(&state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(json_body(response).await["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_readiness() {
        let state = AppState::new(config(&["CD-A01"]));

        let response = app(&state)
            .oneshot(Request::builder().uri("/api/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_item_paths() {
        let doc = serde_json::to_value(<ApiDoc as utoipa::OpenApi>::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/items/search"));
        assert!(paths.contains_key("/api/items/groups"));
    }
}
