use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import database configs from the database library
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL or POSTGRES_* required
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!("Project Management API", "API for Project Management"),
            database,
            server,
            environment,
        })
    }
}
