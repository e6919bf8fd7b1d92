use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::models::{CreateProject, Project, ProjectStatus, UpdateProject};

/// Sea-ORM Entity for the project table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub begin_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "project";
}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            status: model.status,
            begin_date: model.begin_date.map(Into::into),
            end_date: model.end_date.map(Into::into),
        }
    }
}

impl From<CreateProject> for ActiveModel {
    fn from(input: CreateProject) -> Self {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            status: Set(input.status),
            begin_date: Set(input.begin_date.map(Into::into)),
            end_date: Set(input.end_date.map(Into::into)),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = Set(name);
        }
        if let Some(description) = update.description {
            self.description = Set(Some(description));
        }
        if let Some(status) = update.status {
            self.status = Set(status);
        }
        if let Some(begin_date) = update.begin_date {
            self.begin_date = Set(Some(begin_date.into()));
        }
        if let Some(end_date) = update.end_date {
            self.end_date = Set(Some(end_date.into()));
        }
    }
}
