use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(i32),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

/// Convert ProjectError to AppError for standardized error responses
impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => AppError::NotFound(format!("Project {} not found", id)),
            ProjectError::EmptyUpdate => {
                AppError::EmptyUpdate("Project update must supply at least one field".to_string())
            }
            ProjectError::Validation(msg) => AppError::BadRequest(msg),
            ProjectError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
