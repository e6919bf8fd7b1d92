//! Application state management.
//!
//! The state is built once at startup and shared by reference while the
//! domain routers are assembled; cloning it only clones the pool handle.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
