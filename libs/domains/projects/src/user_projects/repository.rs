use async_trait::async_trait;

use super::error::UserProjectResult;
use super::models::UserProject;
use crate::projects::Project;
use crate::users::User;

/// Repository trait for the user/project association
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProjectRepository: Send + Sync {
    async fn user_exists(&self, user_id: i32) -> UserProjectResult<bool>;

    async fn project_exists(&self, project_id: i32) -> UserProjectResult<bool>;

    /// Whether the pair is currently assigned
    async fn exists(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool>;

    /// Insert the pair. A concurrent duplicate yields `AlreadyAssigned`.
    async fn add(&self, user_id: i32, project_id: i32) -> UserProjectResult<UserProject>;

    /// Delete the pair, returning whether it existed
    async fn remove(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool>;

    /// Users assigned to a project, ordered by user id
    async fn users_of_project(&self, project_id: i32) -> UserProjectResult<Vec<User>>;

    /// Projects a user is assigned to, ordered by project id
    async fn projects_of_user(&self, user_id: i32) -> UserProjectResult<Vec<Project>>;
}
