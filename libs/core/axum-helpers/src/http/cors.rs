use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// CORS layer for a fixed set of origins.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Build a CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Returns `Ok(None)` when the variable is unset, so same-origin deployments
/// need no configuration. A set but empty or unparsable value is an error.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        return Ok(None);
    };

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!(origins = %raw, "CORS configured");
    Ok(Some(create_cors_layer(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_origin_disables_cors() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().unwrap().is_none());
        });
    }

    #[test]
    fn test_origin_list_is_parsed() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://pm.example.com"),
            || {
                assert!(cors_layer_from_env().unwrap().is_some());
            },
        );
    }

    #[test]
    fn test_blank_origin_is_rejected() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = cors_layer_from_env().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        });
    }
}
