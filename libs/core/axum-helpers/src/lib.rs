//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! - **[`server`]**: router assembly, liveness endpoint, graceful shutdown
//! - **[`http`]**: security headers and request-id correlated tracing
//! - **[`errors`]**: `AppError` and the JSON error body
//! - **[`extractors`]**: validated JSON body and query extractors

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{ValidatedJson, ValidatedQuery};
pub use http::{REQUEST_ID_HEADER, security_headers, with_request_tracing};
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
