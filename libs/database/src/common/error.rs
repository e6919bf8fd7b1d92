/// Errors raised while bootstrapping or probing the store
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// A physical integrity rule the store refused to break.
#[cfg(feature = "postgres")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Unique index or primary key collision
    Unique(String),
    /// Missing referenced row, or a referenced row that is still in use
    ForeignKey(String),
}

/// Classify a store error as a constraint violation, if it is one.
///
/// Anything else (connectivity, syntax, timeouts) yields `None` and should be
/// treated as a persistence failure by the caller.
#[cfg(feature = "postgres")]
pub fn constraint_violation(err: &sea_orm::DbErr) -> Option<ConstraintViolation> {
    use sea_orm::SqlErr;

    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(detail) => Some(ConstraintViolation::Unique(detail)),
        SqlErr::ForeignKeyConstraintViolation(detail) => {
            Some(ConstraintViolation::ForeignKey(detail))
        }
        _ => None,
    }
}
