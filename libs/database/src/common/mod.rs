//! Error and retry helpers shared by the store modules

pub mod error;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
#[cfg(feature = "postgres")]
pub use error::{ConstraintViolation, constraint_violation};
pub use retry::{RetryConfig, retry, retry_with_backoff};
