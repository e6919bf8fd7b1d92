//! People tracked by the system. Every user holds exactly one role.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User};
pub use postgres::PgUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
