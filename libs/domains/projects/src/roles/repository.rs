use async_trait::async_trait;

use super::error::RoleResult;
use super::models::{CreateRole, Role, UpdateRole};

/// Repository trait for Role persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Create a new role. A taken name yields `DuplicateName`.
    async fn create(&self, input: CreateRole) -> RoleResult<Role>;

    /// Get a role by ID
    async fn get_by_id(&self, id: i32) -> RoleResult<Option<Role>>;

    /// List all roles ordered by id
    async fn list(&self) -> RoleResult<Vec<Role>>;

    /// Apply an update to an existing role
    async fn update(&self, id: i32, input: UpdateRole) -> RoleResult<Role>;

    /// Delete a role by ID. Users still holding it yield `InUse`.
    async fn delete(&self, id: i32) -> RoleResult<bool>;

    /// Number of users holding the role
    async fn count_users(&self, role_id: i32) -> RoleResult<u64>;
}
