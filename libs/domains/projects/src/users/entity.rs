use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::models::{CreateUser, UpdateUser, User};

/// Sea-ORM Entity for the user table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub position: String,
    pub role_id: i32,
    pub creation_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::roles::entity::Entity",
        from = "Column::RoleId",
        to = "crate::roles::entity::Column::Id",
        on_delete = "Restrict"
    )]
    Role,
}

impl Related<crate::roles::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "user";
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            position: model.position,
            role_id: model.role_id,
            role_name: None,
            creation_date: model.creation_date.into(),
        }
    }
}

// creation_date is left to the column default
impl From<CreateUser> for ActiveModel {
    fn from(input: CreateUser) -> Self {
        ActiveModel {
            name: Set(input.name),
            position: Set(input.position),
            role_id: Set(input.role_id),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = Set(name);
        }
        if let Some(position) = update.position {
            self.position = Set(position);
        }
        if let Some(role_id) = update.role_id {
            self.role_id = Set(role_id);
        }
    }
}
