use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Wrap the API routes with documentation and cross-cutting middleware.
///
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - routes are mounted at the root, unprefixed
/// - JSON 404 fallback, JSON 405 for known paths hit with another method
/// - request tracing, security headers, compression
/// - CORS when `CORS_ALLOWED_ORIGIN` is set
///
/// Domain routers apply their own state before being passed in.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but empty or invalid.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = cors_layer_from_env()? {
        router = router.layer(cors);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve with coordinated shutdown, then run `cleanup` (bounded by
/// `shutdown_timeout`) once the signal arrives.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
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
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!(timeout = ?shutdown_timeout, "Running cleanup");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => tracing::warn!(
                timeout = ?shutdown_timeout,
                "Cleanup exceeded timeout, forcing shutdown"
            ),
        }
    });

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Make sure cleanup runs even if the server stopped on its own.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
