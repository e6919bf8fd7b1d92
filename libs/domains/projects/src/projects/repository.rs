use async_trait::async_trait;

use super::error::ProjectResult;
use super::models::{CreateProject, Project, UpdateProject};

/// Repository trait for Project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Create a new project
    async fn create(&self, input: CreateProject) -> ProjectResult<Project>;

    /// Get a project by ID
    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>>;

    /// List all projects ordered by id
    async fn list(&self) -> ProjectResult<Vec<Project>>;

    /// Update an existing project
    async fn update(&self, id: i32, input: UpdateProject) -> ProjectResult<Project>;

    /// Delete a project and its user assignments
    async fn delete(&self, id: i32) -> ProjectResult<bool>;
}
