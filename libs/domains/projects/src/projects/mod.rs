//! Projects with a lifecycle status and an optional schedule.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProjectError, ProjectResult};
pub use models::{CreateProject, Project, ProjectStatus, UpdateProject};
pub use postgres::PgProjectRepository;
pub use repository::ProjectRepository;
pub use service::ProjectService;
