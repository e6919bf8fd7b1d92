//! Error codes carried in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::EmptyUpdate;
//! assert_eq!(code.as_str(), "EMPTY_UPDATE");
//! assert_eq!(code.code(), 1012);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable error identifiers.
///
/// `as_str` is what clients branch on, `code` is what logs and dashboards
/// group by, `default_message` is used when the caller has nothing better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    BadRequest,
    ValidationError,
    /// Path parameter is not a valid identifier
    InvalidPath,
    JsonExtraction,
    NotFound,
    InternalError,
    /// Uniqueness or business-rule conflict
    Conflict,
    /// Query string could not be parsed
    InvalidQuery,
    ServiceUnavailable,
    MethodNotAllowed,
    /// Update request carried no fields
    EmptyUpdate,

    // Store errors (2000-2999)
    /// The store rejected or failed an otherwise valid operation
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPath => "INVALID_PATH",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Conflict => "CONFLICT",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::EmptyUpdate => "EMPTY_UPDATE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::ValidationError => 1001,
            Self::InvalidPath => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::InvalidQuery => 1009,
            Self::ServiceUnavailable => 1011,
            Self::MethodNotAllowed => 1013,
            Self::EmptyUpdate => 1012,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::ValidationError => "Request validation failed",
            Self::InvalidPath => "Invalid path parameter",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::Conflict => "Request conflicts with the current state of the resource",
            Self::InvalidQuery => "Invalid query parameters",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::EmptyUpdate => "No fields to update",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_and_integer_agree_with_serde() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::EmptyUpdate,
            ErrorCode::DatabaseError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"EMPTY_UPDATE\"").unwrap();
        assert_eq!(code, ErrorCode::EmptyUpdate);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::Conflict.to_string(), "CONFLICT");
    }
}
