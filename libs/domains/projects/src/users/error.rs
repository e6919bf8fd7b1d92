use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Includes writes referencing a role that does not exist
    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::EmptyUpdate => {
                AppError::EmptyUpdate("User update must supply at least one field".to_string())
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
