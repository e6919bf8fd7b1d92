use async_trait::async_trait;
use database::{BaseRepository, ConstraintViolation, constraint_violation};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use super::{
    entity,
    error::{RoleError, RoleResult},
    models::{CreateRole, Role, UpdateRole},
    repository::RoleRepository,
};
use crate::users::entity as user_entity;

pub struct PgRoleRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(err: DbErr) -> RoleError {
    RoleError::Database(err.to_string())
}

/// Unique violations on `uq_role_name` surface as `DuplicateName`
fn write_error(err: DbErr, name: Option<&str>) -> RoleError {
    match (constraint_violation(&err), name) {
        (Some(ConstraintViolation::Unique(_)), Some(name)) => {
            RoleError::DuplicateName(name.to_string())
        }
        _ => db_error(err),
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn create(&self, input: CreateRole) -> RoleResult<Role> {
        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| write_error(e, Some(&name)))?;

        tracing::info!(role_id = model.id, "Created role");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> RoleResult<Option<Role>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> RoleResult<Vec<Role>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateRole) -> RoleResult<Role> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(RoleError::NotFound(id))?;

        let name = input.name.clone();
        let mut active_model: entity::ActiveModel = model.into();
        active_model.apply_update(input);

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RoleError::NotFound(id),
                e => write_error(e, name.as_deref()),
            })?;

        tracing::info!(role_id = id, "Updated role");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> RoleResult<bool> {
        let deleted = self.base.delete_by_id(id).await.map_err(|e| {
            match constraint_violation(&e) {
                // fk_user_role_id is ON DELETE RESTRICT
                Some(ConstraintViolation::ForeignKey(_)) => RoleError::InUse(id),
                _ => db_error(e),
            }
        })?;

        if deleted {
            tracing::info!(role_id = id, "Deleted role");
        }
        Ok(deleted)
    }

    async fn count_users(&self, role_id: i32) -> RoleResult<u64> {
        user_entity::Entity::find()
            .filter(user_entity::Column::RoleId.eq(role_id))
            .count(self.base.db())
            .await
            .map_err(db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Developer"), model(2, "Analyst")]])
            .into_connection();
        let repo = PgRoleRepository::new(db);

        let roles = repo.list().await.unwrap();

        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].name, "Analyst");
    }

    #[tokio::test]
    async fn test_update_missing_role_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgRoleRepository::new(db);

        let result = repo
            .update(
                9,
                UpdateRole {
                    name: Some("Architect".to_string()),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(RoleError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgRoleRepository::new(db);

        assert!(!repo.delete(3).await.unwrap());
    }

    #[test]
    fn test_plain_store_errors_stay_opaque() {
        let err = write_error(DbErr::Custom("boom".to_string()), Some("Developer"));
        assert!(matches!(err, RoleError::Database(_)));
    }
}
