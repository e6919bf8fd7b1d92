pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Role 'Developer' already exists"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable detail
    pub message: String,
    /// Structured details, e.g. per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Body of successful operations that return no entity (deletes, association changes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Role deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transport-level error. Domain crates convert their own errors into this.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Update request with nothing to apply
    #[error("Empty update: {0}")]
    EmptyUpdate(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store failure. The payload is logged, never sent to the client.
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::PathRejection(_)
            | AppError::QueryRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::EmptyUpdate(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::PathRejection(_) => ErrorCode::InvalidPath,
            AppError::QueryRejection(_) => ErrorCode::InvalidQuery,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::EmptyUpdate(_) => ErrorCode::EmptyUpdate,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {}", e);
                (e.body_text(), None)
            }
            AppError::PathRejection(e) => {
                tracing::warn!(error_code = code.code(), "Path extraction error: {}", e);
                (e.body_text(), None)
            }
            AppError::QueryRejection(e) => {
                tracing::warn!(error_code = code.code(), "Query extraction error: {}", e);
                (e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", e);
                (
                    code.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::BadRequest(msg)
            | AppError::EmptyUpdate(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), %status, "{}", msg);
                (msg, None)
            }
            AppError::Database(detail) => {
                tracing::error!(error_code = code.code(), "Database error: {}", detail);
                (code.default_message().to_string(), None)
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", detail);
                (code.default_message().to_string(), None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Flatten validator errors into `{field: [{code, message, params}]}`.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}

/// Build an error response without going through [`AppError`].
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("Role 1 not found".into()), StatusCode::NOT_FOUND),
            (AppError::Conflict("in use".into()), StatusCode::CONFLICT),
            (AppError::EmptyUpdate("No fields to update".into()), StatusCode::BAD_REQUEST),
            (AppError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_conflict_body_carries_detail() {
        let response = AppError::Conflict("Role 'Developer' already exists".into()).into_response();
        let body = body_of(response).await;

        assert_eq!(body.code, 1008);
        assert_eq!(body.error, "CONFLICT");
        assert_eq!(body.message, "Role 'Developer' already exists");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_database_error_does_not_leak_store_text() {
        let response = AppError::Database(
            "duplicate key value violates unique constraint \"uq_role_name\"".into(),
        )
        .into_response();
        let body = body_of(response).await;

        assert_eq!(body.error, "DATABASE_ERROR");
        assert_eq!(body.message, "Database error occurred");
        assert!(!body.message.contains("uq_role_name"));
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(
            StatusCode::BAD_REQUEST,
            "bad".to_string(),
            ErrorCode::BadRequest,
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.code, 1000);
    }
}
