pub mod server;
pub mod tracing;

use serde::Serialize;
use std::env;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application metadata, served by `/info` and the health endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
///
/// The two-argument form overrides the display name and description while
/// keeping the package version.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    };
    ($name:expr, $description:expr) => {
        $crate::AppInfo {
            name: $name,
            version: env!("CARGO_PKG_VERSION"),
            description: $description,
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Load a `.env` file from the working directory (or its parents) if one exists.
///
/// Variables already present in the process environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => ::tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => ::tracing::warn!(error = %e, "Failed to load .env file"),
    }
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Load a variable and parse it, falling back to `default` when unset.
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert!(Environment::from_env().is_production());
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_from_cargo_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_app_info_with_display_name() {
        let info = app_info!("Project Management API", "API for Project Management");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "Project Management API");
        assert_eq!(json["description"], "API for Project Management");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("PM_TEST_VAR", Some("test_value"), || {
            assert_eq!(env_or_default("PM_TEST_VAR", "default"), "test_value");
        });
        temp_env::with_var_unset("PM_TEST_VAR", || {
            assert_eq!(env_or_default("PM_TEST_VAR", "default"), "default");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("MISSING_REQUIRED", || {
            let err = env_required("MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("PM_POOL_SIZE", || {
            assert_eq!(env_parse_or("PM_POOL_SIZE", 10u32).unwrap(), 10);
        });
        temp_env::with_var("PM_POOL_SIZE", Some("25"), || {
            assert_eq!(env_parse_or("PM_POOL_SIZE", 10u32).unwrap(), 25);
        });
        temp_env::with_var("PM_POOL_SIZE", Some("lots"), || {
            let err = env_parse_or("PM_POOL_SIZE", 10u32).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "PM_POOL_SIZE"));
        });
    }
}
