//! Project Management Domain
//!
//! Roles, users, projects and the membership of users in projects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Services   │  ← Existence checks, invariants, error taxonomy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! Each area (`roles`, `users`, `projects`, `user_projects`) follows the same
//! layout: `models`, `entity`, `error`, `repository`, `postgres`, `service`,
//! `handlers`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_projects::{InMemoryStore, RoleService, roles};
//!
//! let store = InMemoryStore::new();
//! let service = RoleService::new(store.clone());
//! let router: axum::Router = roles::handlers::router(service);
//! ```

pub mod memory;
pub mod projects;
pub mod roles;
pub mod user_projects;
pub mod users;

pub use memory::InMemoryStore;
pub use projects::{
    CreateProject, PgProjectRepository, Project, ProjectError, ProjectRepository, ProjectResult,
    ProjectService, ProjectStatus, UpdateProject,
};
pub use roles::{
    CreateRole, PgRoleRepository, Role, RoleError, RoleRepository, RoleResult, RoleService,
    UpdateRole,
};
pub use user_projects::{
    PgUserProjectRepository, UserIdQuery, UserProject, UserProjectError, UserProjectRepository,
    UserProjectResult, UserProjectService,
};
pub use users::{
    CreateUser, PgUserRepository, UpdateUser, User, UserError, UserRepository, UserResult,
    UserService,
};
