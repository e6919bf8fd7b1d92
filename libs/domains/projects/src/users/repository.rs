use async_trait::async_trait;

use super::error::UserResult;
use super::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; the store assigns `id` and `creation_date`
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// List all users ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User>;

    /// Delete a user together with their project assignments
    async fn delete(&self, id: i32) -> UserResult<bool>;
}
