use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{PanicResponder, not_found};
use crate::middleware::{create_cors_layer, request_logger, security_headers};
use axum::http::{Method, Uri};
use axum::{Router, middleware};
use core_config::Environment;
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Cross-cutting settings applied by [`create_router`].
#[derive(Clone, Debug)]
pub struct RouterOptions {
    /// Allowed CORS origins; no CORS layer when empty
    pub cors_allowed_origins: Vec<String>,
    /// Whether 500 responses may carry panic details
    pub expose_error_details: bool,
    /// Listed in the 404 fallback body
    pub available_endpoints: &'static [&'static str],
}

impl RouterOptions {
    pub fn new(
        server_config: &ServerConfig,
        environment: Environment,
        available_endpoints: &'static [&'static str],
    ) -> Self {
        Self {
            cors_allowed_origins: server_config.cors_allowed_origins.clone(),
            expose_error_details: environment.expose_error_details(),
            available_endpoints,
        }
    }
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// Sets up:
/// - OpenAPI documentation (Swagger UI at `/swagger-ui`, JSON at
///   `/api-docs/openapi.json`)
/// - `api_routes` nested under `/api`, `top_level` merged at the root
/// - 404 fallback listing the available endpoints
/// - Request logging, tracing spans, security headers, compression
/// - Panic capture turning handler panics into 500 responses
/// - CORS, only when origins are configured
///
/// Routers passed in must already have their state applied.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid
/// header value.
pub fn create_router<T>(
    api_routes: Router,
    top_level: Router,
    options: &RouterOptions,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let endpoints = options.available_endpoints;

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(top_level)
        .nest("/api", api_routes)
        .fallback(move |method: Method, uri: Uri| async move {
            not_found(method, uri, endpoints)
        })
        .layer(middleware::from_fn(request_logger))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(CatchPanicLayer::custom(PanicResponder::new(
            options.expose_error_details,
        )))
        .layer(CompressionLayer::new());

    if !options.cors_allowed_origins.is_empty() {
        info!(
            origins = ?options.cors_allowed_origins,
            "CORS configured with allowed origins"
        );
        router = router.layer(create_cors_layer(&options.cors_allowed_origins)?);
    }

    Ok(router)
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// - Graceful shutdown on SIGINT/SIGTERM
/// - `cleanup` runs after the signal, bounded by `shutdown_timeout`
///
/// # Example
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     tracing::info!("flushing");
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}
