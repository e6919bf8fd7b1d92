//! Membership of users in projects.
//!
//! A (user, project) pair is assigned at most once. The composite primary
//! key of `user_project` enforces that even when two requests race; the
//! service's pre-checks only choose which NotFound to report.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserProjectError, UserProjectResult};
pub use models::{UserIdQuery, UserProject};
pub use postgres::PgUserProjectRepository;
pub use repository::UserProjectRepository;
pub use service::UserProjectService;
