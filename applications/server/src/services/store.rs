/// Store bootstrap - opens the pool once per process
use crate::{config::StorageSettings, error::Result};
use std::path::Path;
use stride_storage::LocalStorageContext;

/// Open the `SQLite` store described by `settings` and bring its schema up to date.
///
/// The parent directory of a file-backed database is created first.
pub async fn connect_store(settings: &StorageSettings) -> Result<LocalStorageContext> {
    if let Some(parent) = database_dir(&settings.database_url) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = stride_storage::create_pool(&settings.database_url, settings.max_connections).await?;
    stride_storage::run_migrations(&pool).await?;

    tracing::info!("Database connected");
    Ok(LocalStorageContext::new(pool))
}

/// Directory that must exist before `SQLite` can create the database file
fn database_dir(database_url: &str) -> Option<&Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
