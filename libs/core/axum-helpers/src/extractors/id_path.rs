//! Integer surrogate-key path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single `{id}` path segment holding a surrogate key.
///
/// Non-numeric ids are rejected with a structured 400 instead of axum's
/// plain-text rejection.
///
/// ```ignore
/// async fn get_role(IdPath(id): IdPath) -> String {
///     format!("Role ID: {}", id)
/// }
///
/// let app = Router::new().route("/role/{id}", get(get_role));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        raw.parse::<i32>().map(IdPath).map_err(|_| {
            AppError::BadRequest(format!("Invalid id: {}", raw)).into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/role/{id}", get(echo))
    }

    #[tokio::test]
    async fn test_numeric_id_is_extracted() {
        let response = app()
            .oneshot(Request::get("/role/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let response = app()
            .oneshot(Request::get("/role/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
