//! Named job roles. A role cannot be removed while users hold it.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{RoleError, RoleResult};
pub use models::{CreateRole, Role, UpdateRole};
pub use postgres::PgRoleRepository;
pub use repository::RoleRepository;
pub use service::RoleService;
