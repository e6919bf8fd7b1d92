use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::{
    entity,
    error::{ProjectError, ProjectResult},
    models::{CreateProject, Project, UpdateProject},
    repository::ProjectRepository,
};

pub struct PgProjectRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_error(err: DbErr) -> ProjectError {
    ProjectError::Database(err.to_string())
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(db_error)?;

        tracing::info!(project_id = model.id, status = %model.status, "Created project");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProjectResult<Option<Project>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProjectResult<Vec<Project>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProject) -> ProjectResult<Project> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or(ProjectError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.apply_update(input);

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProjectError::NotFound(id),
                e => db_error(e),
            })?;

        tracing::info!(project_id = id, "Updated project");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProjectResult<bool> {
        // user_project rows go with it (ON DELETE CASCADE)
        let deleted = self.base.delete_by_id(id).await.map_err(db_error)?;

        if deleted {
            tracing::info!(project_id = id, "Deleted project");
        }
        Ok(deleted)
    }
}
