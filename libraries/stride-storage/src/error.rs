/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Row could not be mapped back to a domain type
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for stride_core::CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(e) => stride_core::CoreError::Database(e.to_string()),
            other => stride_core::CoreError::storage(other.to_string()),
        }
    }
}
