use std::sync::Arc;
use validator::Validate;

use crate::projects::error::{ProjectError, ProjectResult};
use crate::projects::models::{CreateProject, Project, UpdateProject};
use crate::projects::repository::ProjectRepository;

/// Service layer for Project business logic
#[derive(Clone)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new project with validation
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: i32) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    pub async fn list_projects(&self) -> ProjectResult<Vec<Project>> {
        self.repository.list().await
    }

    /// Update a project. Unknown ids are reported before empty payloads.
    pub async fn update_project(&self, id: i32, input: UpdateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        self.get_project(id).await?;

        if input.is_empty() {
            tracing::debug!(project_id = id, "Rejected empty project update");
            return Err(ProjectError::EmptyUpdate);
        }

        self.repository.update(id, input).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i32) -> ProjectResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProjectError::NotFound(id));
        }

        Ok(())
    }
}
