use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::models::{CreateRole, Role, UpdateRole};

/// Sea-ORM Entity for the role table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::users::entity::Entity")]
    User,
}

impl Related<crate::users::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "role";
}

impl From<Model> for Role {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<CreateRole> for ActiveModel {
    fn from(input: CreateRole) -> Self {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            ..Default::default()
        }
    }
}

impl ActiveModel {
    /// Mark the supplied fields of an update as changed
    pub fn apply_update(&mut self, update: UpdateRole) {
        if let Some(name) = update.name {
            self.name = Set(name);
        }
        if let Some(description) = update.description {
            self.description = Set(Some(description));
        }
    }
}
