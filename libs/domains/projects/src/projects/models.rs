use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Project lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "project_status")]
pub enum ProjectStatus {
    #[default]
    #[sea_orm(string_value = "Planning")]
    #[serde(rename = "Planning")]
    #[strum(serialize = "Planning")]
    Planning,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    #[serde(rename = "Completed")]
    #[strum(serialize = "Completed")]
    Completed,
    #[sea_orm(string_value = "On Hold")]
    #[serde(rename = "On Hold")]
    #[strum(serialize = "On Hold")]
    OnHold,
    #[sea_orm(string_value = "Cancelled")]
    #[serde(rename = "Cancelled")]
    #[strum(serialize = "Cancelled")]
    Cancelled,
}

/// A unit of work users can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "New Super App")]
    pub name: String,
    #[schema(example = "Development of a new mobile application.")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[schema(example = "2024-01-15T09:00:00Z")]
    pub begin_date: Option<DateTime<Utc>>,
    #[schema(example = "2024-12-20T17:00:00Z")]
    pub end_date: Option<DateTime<Utc>>,
}

/// DTO for creating a project. Status defaults to `Planning`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[validate(schema(function = "validate_schedule"))]
pub struct CreateProject {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "New Super App")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Development of a new mobile application.")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    #[schema(example = "2024-01-15T09:00:00Z")]
    pub begin_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[schema(example = "2024-12-20T17:00:00Z")]
    pub end_date: Option<DateTime<Utc>>,
}

fn validate_schedule(input: &CreateProject) -> Result<(), ValidationError> {
    match (input.begin_date, input.end_date) {
        (Some(begin), Some(end)) if begin > end => {
            let mut err = ValidationError::new("schedule");
            err.message = Some("begin_date must not be after end_date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// DTO for updating a project. Absent (or null) fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255))]
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Development phase started.")]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "In Progress")]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub begin_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl UpdateProject {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.begin_date.is_none()
            && self.end_date.is_none()
    }
}

impl Project {
    pub fn new(id: i32, input: CreateProject) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            status: input.status,
            begin_date: input.begin_date,
            end_date: input.end_date,
        }
    }

    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(begin_date) = update.begin_date {
            self.begin_date = Some(begin_date);
        }
        if let Some(end_date) = update.end_date {
            self.end_date = Some(end_date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            serde_json::json!("In Progress")
        );
        assert_eq!(
            ProjectStatus::from_str("On Hold").unwrap(),
            ProjectStatus::OnHold
        );
        assert_eq!(ProjectStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let parsed: Result<UpdateProject, _> =
            serde_json::from_str(r#"{"status": "Archived"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_defaults_to_planning() {
        let input: CreateProject = serde_json::from_str(r#"{"name": "New Super App"}"#).unwrap();

        assert_eq!(input.status, ProjectStatus::Planning);
        assert!(input.begin_date.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_schedule_must_not_end_before_it_begins() {
        let input: CreateProject = serde_json::from_str(
            r#"{
                "name": "New Super App",
                "begin_date": "2024-12-20T17:00:00Z",
                "end_date": "2024-01-15T09:00:00Z"
            }"#,
        )
        .unwrap();

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_example_payload() {
        let update: UpdateProject = serde_json::from_str(
            r#"{"status": "In Progress", "description": "Development phase started."}"#,
        )
        .unwrap();

        assert!(!update.is_empty());
        assert_eq!(update.status, Some(ProjectStatus::InProgress));
        assert!(update.name.is_none());
    }
}
