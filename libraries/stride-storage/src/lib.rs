//! Stride Storage
//!
//! `SQLite` persistence for the Stride exercise tracker.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each collection (`users`, `exercises`) owns its queries
//! - **Weak References**: exercises point at users by id with no foreign key
//! - **Single Pool**: one connection pool per process, shared by every request
//!
//! # Example
//!
//! ```rust,no_run
//! use stride_storage::{create_pool, run_migrations, LocalStorageContext};
//! use stride_core::{storage::TrackerStore, types::LogQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://stride.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let user = storage.create_user("fcc_test").await?;
//! let log = storage.get_exercises(&user.id, &LogQuery::default()).await?;
//! assert!(log.is_empty());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod exercises;
pub mod users;

pub use context::LocalStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to request handlers.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://stride.db>`)
/// * `max_connections` - upper bound on pooled connections
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "sqlite pool ready");

    Ok(pool)
}
