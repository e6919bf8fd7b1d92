use std::sync::Arc;
use validator::Validate;

use super::error::{UserError, UserResult};
use super::models::{CreateUser, UpdateUser, User};
use super::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user. The referenced role must exist.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Update a user. Unknown ids are reported before empty payloads.
    pub async fn update_user(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.get_user(id).await?;

        if input.is_empty() {
            tracing::debug!(user_id = id, "Rejected empty user update");
            return Err(UserError::EmptyUpdate);
        }

        self.repository.update(id, input).await
    }

    /// Delete a user along with their project assignments
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use crate::roles::{CreateRole, RoleRepository};
    use crate::users::repository::MockUserRepository;

    async fn store_with_role() -> (InMemoryStore, i32) {
        let store = InMemoryStore::new();
        let role = RoleRepository::create(
            &store,
            CreateRole {
                name: "Developer".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
        (store, role.id)
    }

    fn max_weber(role_id: i32) -> CreateUser {
        CreateUser {
            name: "Max Weber".to_string(),
            position: "Software Engineer".to_string(),
            role_id,
        }
    }

    #[tokio::test]
    async fn test_create_user_assigns_id_and_creation_date() {
        let (store, role_id) = store_with_role().await;
        let service = UserService::new(store);

        let first = service.create_user(max_weber(role_id)).await.unwrap();
        let second = service.create_user(max_weber(role_id)).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.creation_date >= first.creation_date);
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_user_with_unknown_role_is_persistence_failure() {
        let service = UserService::new(InMemoryStore::new());

        let result = service.create_user(max_weber(99)).await;

        assert!(matches!(result, Err(UserError::Database(_))));
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_creation_date() {
        let (store, role_id) = store_with_role().await;
        let service = UserService::new(store);
        let created = service.create_user(max_weber(role_id)).await.unwrap();

        let updated = service
            .update_user(
                created.id,
                UpdateUser {
                    position: Some("Tech Lead".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.position, "Tech Lead");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.creation_date, created.creation_date);
    }

    #[tokio::test]
    async fn test_empty_update_on_existing_user() {
        let (store, role_id) = store_with_role().await;
        let service = UserService::new(store);
        let created = service.create_user(max_weber(role_id)).await.unwrap();

        let result = service.update_user(created.id, UpdateUser::default()).await;

        assert!(matches!(result, Err(UserError::EmptyUpdate)));
    }

    #[tokio::test]
    async fn test_update_missing_user_skips_write() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let result = service
            .update_user(
                5,
                UpdateUser {
                    name: Some("Anna".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UserError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let service = UserService::new(InMemoryStore::new());

        assert!(matches!(
            service.delete_user(3).await,
            Err(UserError::NotFound(3))
        ));
    }
}
