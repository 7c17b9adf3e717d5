use super::health::health_router;
use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{security_headers, with_request_tracing};
use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
};
use core_config::{AppInfo, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the configured address and serves `router` until SIGINT/SIGTERM.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Assembles the public router around already-stateful API routes.
///
/// - `apis` nested under `/api`
/// - liveness at `/health`
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - JSON 404 fallback
/// - request-id correlated tracing, security headers, CORS, compression
///
/// Every route, `/health` included, sits behind the same layers.
///
/// `allowed_origins` must hold at least one valid origin.
pub fn create_router<T>(
    apis: Router,
    app_info: AppInfo,
    allowed_origins: &[String],
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer(allowed_origins)?;
    info!(origins = ?allowed_origins, "CORS configured");

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .merge(health_router(app_info))
        .fallback(not_found);

    Ok(with_request_tracing(router)
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new()))
}

fn cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS origin: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "At least one CORS origin is required",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app_info() -> AppInfo {
        AppInfo {
            name: "catalog",
            version: "0.1.0",
        }
    }

    fn origins() -> Vec<String> {
        vec!["http://localhost:3000".to_string()]
    }

    #[test]
    fn test_rejects_empty_origin_list() {
        let err = create_router::<TestDoc>(Router::new(), app_info(), &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let err =
            create_router::<TestDoc>(Router::new(), app_info(), &["bad\norigin".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_nests_api_and_falls_back_to_404() {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        let app = create_router::<TestDoc>(apis, app_info(), &origins()).unwrap();

        let ok = app
            .clone()
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(ok.headers().get("x-frame-options").unwrap(), "DENY");
        assert!(ok.headers().contains_key("x-request-id"));

        let missing = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_is_behind_the_same_layers() {
        let app = create_router::<TestDoc>(Router::new(), app_info(), &origins()).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers().get("x-content-type-options").unwrap(), "nosniff");
    }
}
