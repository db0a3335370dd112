//! Store trait for users and their exercise entries

use crate::error::{CoreError, Result};
use crate::types::{CreateExercise, Exercise, LogQuery, User, UserId};
use async_trait::async_trait;

/// Backing store for users and exercises.
///
/// Implementations own their concurrency; callers share one instance
/// behind an `Arc` and never hold locks across calls.
#[async_trait]
pub trait TrackerStore: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Get all users, oldest first
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a user. Usernames are not checked for uniqueness or emptiness.
    async fn create_user(&self, username: &str) -> Result<User>;

    /// Number of users in the store
    async fn count_users(&self) -> Result<i64>;

    /// Get user by ID
    async fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// Get user by ID, failing with `UserNotFound` if absent
    async fn require_user(&self, id: &UserId) -> Result<User> {
        self.get_user(id)
            .await?
            .ok_or_else(|| CoreError::UserNotFound(id.clone()))
    }

    // ========================================================================
    // Exercises
    // ========================================================================

    /// Persist a new exercise entry. The caller resolves the owning user.
    async fn create_exercise(&self, exercise: CreateExercise) -> Result<Exercise>;

    /// Get a user's exercises matching `query`, ascending by date then
    /// creation time, at most `query.limit` of them
    async fn get_exercises(&self, user_id: &UserId, query: &LogQuery) -> Result<Vec<Exercise>>;
}
