use std::sync::Arc;
use validator::Validate;

use super::error::{RoleError, RoleResult};
use super::models::{CreateRole, Role, UpdateRole};
use super::repository::RoleRepository;

/// Service layer for Role business logic
#[derive(Clone)]
pub struct RoleService<R: RoleRepository> {
    repository: Arc<R>,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new role. Names are unique.
    pub async fn create_role(&self, input: CreateRole) -> RoleResult<Role> {
        input
            .validate()
            .map_err(|e| RoleError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a role by ID
    pub async fn get_role(&self, id: i32) -> RoleResult<Role> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(RoleError::NotFound(id))
    }

    pub async fn list_roles(&self) -> RoleResult<Vec<Role>> {
        self.repository.list().await
    }

    /// Update a role. Unknown ids are reported before empty payloads.
    pub async fn update_role(&self, id: i32, input: UpdateRole) -> RoleResult<Role> {
        input
            .validate()
            .map_err(|e| RoleError::Validation(e.to_string()))?;

        self.get_role(id).await?;

        if input.is_empty() {
            tracing::debug!(role_id = id, "Rejected empty role update");
            return Err(RoleError::EmptyUpdate);
        }

        self.repository.update(id, input).await
    }

    /// Delete a role that no user holds
    pub async fn delete_role(&self, id: i32) -> RoleResult<()> {
        self.get_role(id).await?;

        let holders = self.repository.count_users(id).await?;
        if holders > 0 {
            tracing::warn!(role_id = id, holders, "Refused to delete role in use");
            return Err(RoleError::InUse(id));
        }

        if !self.repository.delete(id).await? {
            return Err(RoleError::NotFound(id));
        }

        Ok(())
    }
}
