//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`middleware`]**: API key gate, request logging, CORS, security headers
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Validated JSON and query extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, RouterOptions};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let options = RouterOptions::new(&config, Environment::Development, &[]);
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new(), &options)?;
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, RouterOptions, ShutdownCoordinator, create_production_app, create_router,
    health_router, shutdown_signal,
};

// Re-export middleware
pub use middleware::{
    API_KEY_HEADER, create_cors_layer, request_logger, require_api_key, security_headers,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{QueryParams, ValidatedJson};
