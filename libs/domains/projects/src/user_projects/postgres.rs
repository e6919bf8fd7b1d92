use async_trait::async_trait;
use database::{BaseRepository, ConstraintViolation, constraint_violation};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use super::{
    entity,
    error::{UserProjectError, UserProjectResult},
    models::UserProject,
    repository::UserProjectRepository,
};
use crate::projects::{Project, entity as project_entity};
use crate::users::{self, User, entity as user_entity};

const PROJECT_FOREIGN_KEY: &str = "fk_user_project_project_id";

pub struct PgUserProjectRepository {
    links: BaseRepository<entity::Entity>,
    users: BaseRepository<user_entity::Entity>,
    projects: BaseRepository<project_entity::Entity>,
}

impl PgUserProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            links: BaseRepository::new(db.clone()),
            users: BaseRepository::new(db.clone()),
            projects: BaseRepository::new(db),
        }
    }
}

fn db_error(err: DbErr) -> UserProjectError {
    UserProjectError::Database(err.to_string())
}

/// Classify a failed insert. The primary key decides duplicate races; a
/// missing endpoint deleted after the pre-checks shows up as a foreign-key
/// violation naming the constraint.
fn insert_error(err: DbErr, user_id: i32, project_id: i32) -> UserProjectError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::Unique(_)) => UserProjectError::AlreadyAssigned {
            user_id,
            project_id,
        },
        Some(ConstraintViolation::ForeignKey(detail)) if detail.contains(PROJECT_FOREIGN_KEY) => {
            UserProjectError::ProjectNotFound(project_id)
        }
        Some(ConstraintViolation::ForeignKey(_)) => UserProjectError::UserNotFound(user_id),
        None => db_error(err),
    }
}

#[async_trait]
impl UserProjectRepository for PgUserProjectRepository {
    async fn user_exists(&self, user_id: i32) -> UserProjectResult<bool> {
        self.users.exists(user_id).await.map_err(db_error)
    }

    async fn project_exists(&self, project_id: i32) -> UserProjectResult<bool> {
        self.projects.exists(project_id).await.map_err(db_error)
    }

    async fn exists(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool> {
        self.links
            .exists((user_id, project_id))
            .await
            .map_err(db_error)
    }

    async fn add(&self, user_id: i32, project_id: i32) -> UserProjectResult<UserProject> {
        let active_model = entity::ActiveModel {
            user_id: Set(user_id),
            project_id: Set(project_id),
        };

        let model = self
            .links
            .insert(active_model)
            .await
            .map_err(|e| insert_error(e, user_id, project_id))?;

        tracing::info!(user_id, project_id, "Added user to project");
        Ok(model.into())
    }

    async fn remove(&self, user_id: i32, project_id: i32) -> UserProjectResult<bool> {
        let removed = self
            .links
            .delete_by_id((user_id, project_id))
            .await
            .map_err(db_error)?;

        if removed {
            tracing::info!(user_id, project_id, "Removed user from project");
        }
        Ok(removed)
    }

    async fn users_of_project(&self, project_id: i32) -> UserProjectResult<Vec<User>> {
        let models = user_entity::Entity::find()
            .join(JoinType::InnerJoin, entity::Relation::User.def().rev())
            .filter(entity::Column::ProjectId.eq(project_id))
            .order_by_asc(user_entity::Column::Id)
            .all(self.links.db())
            .await
            .map_err(db_error)?;

        users::postgres::into_users(self.links.db(), models)
            .await
            .map_err(db_error)
    }

    async fn projects_of_user(&self, user_id: i32) -> UserProjectResult<Vec<Project>> {
        let models = project_entity::Entity::find()
            .join(JoinType::InnerJoin, entity::Relation::Project.def().rev())
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_asc(project_entity::Column::Id)
            .all(self.links.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    #[test]
    fn test_unclassified_insert_error_is_database() {
        let err = DbErr::Exec(RuntimeErr::Internal("socket closed".to_string()));
        assert!(matches!(
            insert_error(err, 1, 2),
            UserProjectError::Database(_)
        ));
    }

    #[tokio::test]
    async fn test_exists_uses_composite_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entity::Model {
                user_id: 3,
                project_id: 4,
            }]])
            .into_connection();
        let repo = PgUserProjectRepository::new(db);

        assert!(repo.exists(3, 4).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_missing_pair_returns_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgUserProjectRepository::new(db);

        assert!(!repo.remove(3, 4).await.unwrap());
    }

    #[tokio::test]
    async fn test_users_of_project_maps_rows() {
        let creation_date = chrono::Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_entity::Model {
                id: 3,
                name: "Max Weber".to_string(),
                position: "Software Engineer".to_string(),
                role_id: 1,
                creation_date,
            }]])
            .append_query_results([vec![crate::roles::entity::Model {
                id: 1,
                name: "Developer".to_string(),
                description: None,
            }]])
            .into_connection();
        let repo = PgUserProjectRepository::new(db);

        let users = repo.users_of_project(4).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 3);
        assert_eq!(users[0].role_name.as_deref(), Some("Developer"));
    }
}
