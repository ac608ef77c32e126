//! Repository implementations for database operations.

pub mod contact;
pub mod user;

pub use contact::ContactRepository;
pub use user::UserRepository;

use domain::services::StoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Maps a driver error onto the storage error seen by services.
pub(crate) fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                StoreError::UniqueViolation(db_err.constraint().unwrap_or("unique").to_string())
            } else {
                StoreError::Backend(format!("Database error: {}", db_err))
            }
        }
        _ => StoreError::Backend(format!("Database error: {}", err)),
    }
}
