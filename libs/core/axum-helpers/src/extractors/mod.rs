//! Extractors that reject with [`AppError`](crate::errors::AppError) bodies
//! instead of axum's plain-text defaults.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;

/// `Query<T>` whose rejection renders as a structured 400.
pub type Query<T> =
    axum_extra::extract::WithRejection<axum::extract::Query<T>, crate::errors::AppError>;
