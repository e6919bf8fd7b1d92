//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API binaries.
//!
//! - **[`errors`]**: `AppError` and the structured `{code, error, message}` body
//! - **[`extractors`]**: integer id paths, validated JSON, query rejections
//! - **[`server`]**: router assembly with OpenAPI docs, liveness and info
//!   endpoints, readiness checks, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, LivenessResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, MessageResponse};

pub use extractors::{IdPath, ValidatedJson};
