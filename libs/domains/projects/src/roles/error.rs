use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleError {
    #[error("Role not found: {0}")]
    NotFound(i32),

    #[error("Role with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Role {0} is still assigned to users")]
    InUse(i32),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RoleResult<T> = Result<T, RoleError>;

/// Convert RoleError to AppError for standardized error responses
impl From<RoleError> for AppError {
    fn from(err: RoleError) -> Self {
        match err {
            RoleError::NotFound(id) => AppError::NotFound(format!("Role {} not found", id)),
            RoleError::DuplicateName(name) => {
                AppError::Conflict(format!("Role with name '{}' already exists", name))
            }
            RoleError::InUse(id) => AppError::Conflict(format!(
                "Role {} cannot be deleted while users are assigned to it",
                id
            )),
            RoleError::EmptyUpdate => {
                AppError::EmptyUpdate("Role update must supply at least one field".to_string())
            }
            RoleError::Validation(msg) => AppError::BadRequest(msg),
            RoleError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for RoleError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
