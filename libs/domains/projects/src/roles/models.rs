use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A job role users can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    /// Surrogate key assigned by the store
    #[schema(example = 1)]
    pub id: i32,
    /// Unique role name
    #[schema(example = "Project Manager")]
    pub name: String,
    #[schema(example = "Responsible for managing projects and teams.")]
    pub description: Option<String>,
}

/// DTO for creating a role
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRole {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Developer")]
    pub name: String,
    #[validate(length(max = 1000))]
    #[serde(default)]
    #[schema(example = "Responsible for developing software.")]
    pub description: Option<String>,
}

/// DTO for updating a role. Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRole {
    #[validate(length(min = 1, max = 255))]
    #[serde(default)]
    #[schema(example = "Analyst")]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    #[serde(default)]
    #[schema(example = "Responsible for analyzing requirements.")]
    pub description: Option<String>,
}

impl UpdateRole {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Role {
    pub fn new(id: i32, input: CreateRole) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
        }
    }

    /// Apply the supplied fields of an update
    pub fn apply_update(&mut self, update: UpdateRole) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
    }
}
