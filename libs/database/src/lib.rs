//! Relational store plumbing shared by the apps and domain crates.
//!
//! - connection pool bootstrap with retry and startup migrations
//! - a readiness probe (`SELECT 1`)
//! - [`BaseRepository`], the generic CRUD primitive each domain repository wraps
//! - classification of constraint violations reported by the store
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "pm_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod repository;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "postgres")]
pub use common::{ConstraintViolation, constraint_violation};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
