/// Persistence failures surfaced by the store

use sqlx::error::ErrorKind;

/// Errors raised while reading or writing the relational store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The engine refused the row (foreign key, NOT NULL, UNIQUE or CHECK)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity or engine-level failure
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return StoreError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Storage(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
