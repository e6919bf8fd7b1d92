use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A person who can be assigned to projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Max Weber")]
    pub name: String,
    #[schema(example = "Software Engineer")]
    pub position: String,
    /// Role held by the user
    #[schema(example = 1)]
    pub role_id: i32,
    /// Name of the held role, resolved when the user is read
    #[serde(default)]
    #[schema(example = "Developer")]
    pub role_name: Option<String>,
    /// Set by the store when the user is created
    pub creation_date: DateTime<Utc>,
}

/// DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Max Weber")]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Software Engineer")]
    pub position: String,
    #[schema(example = 1)]
    pub role_id: i32,
}

/// DTO for updating a user. Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    #[serde(default)]
    #[schema(example = "Max Weber")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    #[serde(default)]
    #[schema(example = "Tech Lead")]
    pub position: Option<String>,
    #[serde(default)]
    #[schema(example = 2)]
    pub role_id: Option<i32>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.role_id.is_none()
    }
}

impl User {
    pub fn new(id: i32, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            position: input.position,
            role_id: input.role_id,
            role_name: None,
            creation_date: Utc::now(),
        }
    }

    /// Apply the supplied fields of an update. `creation_date` never changes.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(role_id) = update.role_id {
            if role_id != self.role_id {
                self.role_name = None;
            }
            self.role_id = role_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_only_touches_supplied_fields() {
        let mut user = User::new(
            1,
            CreateUser {
                name: "Max Weber".to_string(),
                position: "Software Engineer".to_string(),
                role_id: 1,
            },
        );
        let created = user.creation_date;

        user.apply_update(UpdateUser {
            position: Some("Tech Lead".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "Max Weber");
        assert_eq!(user.position, "Tech Lead");
        assert_eq!(user.role_id, 1);
        assert_eq!(user.creation_date, created);
    }

    #[test]
    fn test_role_change_drops_stale_role_name() {
        let mut user = User::new(
            1,
            CreateUser {
                name: "Max Weber".to_string(),
                position: "Software Engineer".to_string(),
                role_id: 1,
            },
        );
        user.role_name = Some("Developer".to_string());

        user.apply_update(UpdateUser {
            role_id: Some(1),
            ..Default::default()
        });
        assert_eq!(user.role_name.as_deref(), Some("Developer"));

        user.apply_update(UpdateUser {
            role_id: Some(2),
            ..Default::default()
        });
        assert_eq!(user.role_name, None);
    }

    #[test]
    fn test_create_user_deserializes_example_payload() {
        let input: CreateUser = serde_json::from_str(
            r#"{"name": "Max Weber", "position": "Software Engineer", "role_id": 1}"#,
        )
        .unwrap();

        assert!(input.validate().is_ok());
        assert_eq!(input.role_id, 1);
    }

    #[test]
    fn test_update_user_rejects_blank_position() {
        let update = UpdateUser {
            position: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
