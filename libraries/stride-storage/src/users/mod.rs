//! User queries

use crate::StorageError;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use stride_core::types::{User, UserId};

type Result<T> = std::result::Result<T, StorageError>;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    username: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self> {
        let created_at = DateTime::<Utc>::from_timestamp_millis(row.created_at).ok_or_else(|| {
            StorageError::CorruptRow(format!(
                "user {} has invalid created_at {}",
                row.id, row.created_at
            ))
        })?;

        Ok(User {
            id: row.id,
            username: row.username,
            created_at,
        })
    }
}

/// Get all users, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows: Vec<UserRow> =
        sqlx::query_as("SELECT id, username, created_at FROM users ORDER BY created_at, id")
            .fetch_all(pool)
            .await?;

    rows.into_iter().map(User::try_from).collect()
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row: Option<UserRow> =
        sqlx::query_as("SELECT id, username, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    row.map(User::try_from).transpose()
}

/// Insert a new user
///
/// No uniqueness check: two users may share a username.
pub async fn create(pool: &SqlitePool, username: &str) -> Result<User> {
    let user = User::new(username);

    sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
        .bind(&user.id)
        .bind(&user.username)
        .bind(user.created_at.timestamp_millis())
        .execute(pool)
        .await?;

    Ok(user)
}

/// Count all users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
