use std::sync::Arc;

use super::error::{UserProjectError, UserProjectResult};
use super::models::UserProject;
use super::repository::UserProjectRepository;
use crate::projects::Project;
use crate::users::User;

/// Service layer for assigning users to projects
#[derive(Clone)]
pub struct UserProjectService<R: UserProjectRepository> {
    repository: Arc<R>,
}

impl<R: UserProjectRepository> UserProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    async fn ensure_user(&self, user_id: i32) -> UserProjectResult<()> {
        if !self.repository.user_exists(user_id).await? {
            return Err(UserProjectError::UserNotFound(user_id));
        }
        Ok(())
    }

    async fn ensure_project(&self, project_id: i32) -> UserProjectResult<()> {
        if !self.repository.project_exists(project_id).await? {
            return Err(UserProjectError::ProjectNotFound(project_id));
        }
        Ok(())
    }

    /// Assign a user to a project.
    ///
    /// Checks run in order (user, project, existing pair) and stop at the
    /// first failure, so nothing is written unless all pass. Two callers
    /// racing past the checks are still serialized by the store: exactly one
    /// insert wins and the other gets `AlreadyAssigned`.
    pub async fn add_user_to_project(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> UserProjectResult<UserProject> {
        self.ensure_user(user_id).await?;
        self.ensure_project(project_id).await?;

        if self.repository.exists(user_id, project_id).await? {
            tracing::debug!(user_id, project_id, "User already assigned to project");
            return Err(UserProjectError::AlreadyAssigned {
                user_id,
                project_id,
            });
        }

        self.repository.add(user_id, project_id).await
    }

    /// Remove a user from a project
    pub async fn remove_user_from_project(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> UserProjectResult<()> {
        self.ensure_user(user_id).await?;
        self.ensure_project(project_id).await?;

        let not_assigned = UserProjectError::AssociationNotFound {
            user_id,
            project_id,
        };

        if !self.repository.exists(user_id, project_id).await? {
            return Err(not_assigned);
        }

        // Lost a race with another remove
        if !self.repository.remove(user_id, project_id).await? {
            return Err(not_assigned);
        }

        Ok(())
    }

    /// Users assigned to a project
    pub async fn list_project_users(&self, project_id: i32) -> UserProjectResult<Vec<User>> {
        self.ensure_project(project_id).await?;
        self.repository.users_of_project(project_id).await
    }

    /// Projects a user is assigned to
    pub async fn list_user_projects(&self, user_id: i32) -> UserProjectResult<Vec<Project>> {
        self.ensure_user(user_id).await?;
        self.repository.projects_of_user(user_id).await
    }
}
