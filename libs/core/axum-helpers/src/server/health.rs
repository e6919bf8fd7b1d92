use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

/// Static liveness payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "API is running")]
    pub message: String,
}

/// A boxed readiness probe
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Run readiness probes concurrently.
///
/// The body is `{"status": "ready" | "not ready", <name>: "connected" | "disconnected", ...}`;
/// any failing probe turns the status code into 503.
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> (StatusCode, Json<Value>) {
    let (names, probes): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(probes).await;

    let mut body = Map::new();
    let mut all_healthy = true;

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!(check = name, error = %e, "Readiness check failed");
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if all_healthy { "ready" } else { "not ready" }),
    );

    let status = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(Value::Object(body)))
}

pub async fn healthcheck_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
        message: "API is running".to_string(),
    })
}

pub async fn info_handler(State(app): State<AppInfo>) -> Json<AppInfo> {
    Json(app)
}

/// `/healthcheck` (always 200 while the process serves) and `/info`
/// (name, version, description).
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/info", get(info_handler))
        .with_state(app_info)
}
