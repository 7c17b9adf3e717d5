//! Server infrastructure: router assembly, liveness endpoint, graceful shutdown.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes, app_info!(), &cors_origins)?;
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
