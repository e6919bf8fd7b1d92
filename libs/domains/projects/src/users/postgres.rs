use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeSet, HashMap};

use super::{
    entity,
    error::{UserError, UserResult},
    models::{CreateUser, UpdateUser, User},
    repository::UserRepository,
};
use crate::roles::entity as role_entity;

pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

// An unknown role_id lands here too, as a foreign-key violation
fn db_error(err: DbErr) -> UserError {
    UserError::Database(err.to_string())
}

async fn role_name_of(db: &DatabaseConnection, role_id: i32) -> Result<Option<String>, DbErr> {
    let role = role_entity::Entity::find_by_id(role_id).one(db).await?;
    Ok(role.map(|role| role.name))
}

async fn into_user(db: &DatabaseConnection, model: entity::Model) -> Result<User, DbErr> {
    let role_name = role_name_of(db, model.role_id).await?;
    let mut user = User::from(model);
    user.role_name = role_name;
    Ok(user)
}

/// Convert user rows, resolving role names with a single lookup
pub(crate) async fn into_users(
    db: &DatabaseConnection,
    models: Vec<entity::Model>,
) -> Result<Vec<User>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let role_ids: BTreeSet<i32> = models.iter().map(|m| m.role_id).collect();
    let names: HashMap<i32, String> = role_entity::Entity::find()
        .filter(role_entity::Column::Id.is_in(role_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|role| (role.id, role.name))
        .collect();

    Ok(models
        .into_iter()
        .map(|model| {
            let role_name = names.get(&model.role_id).cloned();
            let mut user = User::from(model);
            user.role_name = role_name;
            user
        })
        .collect())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(db_error)?;

        tracing::info!(user_id = model.id, role_id = model.role_id, "Created user");
        into_user(self.base.db(), model).await.map_err(db_error)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let Some(model) = self.base.find_by_id(id).await.map_err(db_error)? else {
            return Ok(None);
        };
        into_user(self.base.db(), model)
            .await
            .map(Some)
            .map_err(db_error)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        into_users(self.base.db(), models).await.map_err(db_error)
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(UserError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.apply_update(input);

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => UserError::NotFound(id),
                e => db_error(e),
            })?;

        tracing::info!(user_id = id, "Updated user");
        into_user(self.base.db(), updated).await.map_err(db_error)
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        // user_project rows go with it (ON DELETE CASCADE)
        let deleted = self.base.delete_by_id(id).await.map_err(db_error)?;

        if deleted {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_get_by_id_converts_timestamp_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let creation_date = offset.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                id: 4,
                name: "Max Weber".to_string(),
                position: "Software Engineer".to_string(),
                role_id: 1,
                creation_date,
            }]])
            .append_query_results([vec![role_entity::Model {
                id: 1,
                name: "Developer".to_string(),
                description: None,
            }]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.get_by_id(4).await.unwrap().unwrap();

        assert_eq!(user.creation_date.to_rfc3339(), "2024-01-15T09:00:00+00:00");
        assert_eq!(user.role_name.as_deref(), Some("Developer"));
    }

    #[tokio::test]
    async fn test_list_resolves_role_names() {
        let creation_date = chrono::Utc::now().fixed_offset();
        let row = |id: i32, role_id: i32| entity::Model {
            id,
            name: format!("User {id}"),
            position: "Software Engineer".to_string(),
            role_id,
            creation_date,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, 1), row(2, 2), row(3, 1)]])
            .append_query_results([vec![
                role_entity::Model {
                    id: 1,
                    name: "Developer".to_string(),
                    description: None,
                },
                role_entity::Model {
                    id: 2,
                    name: "Project Manager".to_string(),
                    description: None,
                },
            ]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let users = repo.list().await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.role_name.as_deref()).collect();
        assert_eq!(
            names,
            vec![Some("Developer"), Some("Project Manager"), Some("Developer")]
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(matches!(repo.list().await, Err(UserError::Database(_))));
    }
}
