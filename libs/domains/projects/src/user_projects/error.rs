use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserProjectError {
    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Project not found: {0}")]
    ProjectNotFound(i32),

    #[error("User {user_id} is not assigned to project {project_id}")]
    AssociationNotFound { user_id: i32, project_id: i32 },

    #[error("User {user_id} is already assigned to project {project_id}")]
    AlreadyAssigned { user_id: i32, project_id: i32 },

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserProjectResult<T> = Result<T, UserProjectError>;

impl From<UserProjectError> for AppError {
    fn from(err: UserProjectError) -> Self {
        match err {
            UserProjectError::UserNotFound(id) => {
                AppError::NotFound(format!("User {} not found", id))
            }
            UserProjectError::ProjectNotFound(id) => {
                AppError::NotFound(format!("Project {} not found", id))
            }
            e @ UserProjectError::AssociationNotFound { .. } => AppError::NotFound(e.to_string()),
            e @ UserProjectError::AlreadyAssigned { .. } => AppError::Conflict(e.to_string()),
            UserProjectError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for UserProjectError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
