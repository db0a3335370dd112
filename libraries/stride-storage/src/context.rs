use crate::{exercises, users};
use async_trait::async_trait;
use sqlx::SqlitePool;
use stride_core::{
    error::Result,
    storage::TrackerStore,
    types::{CreateExercise, Exercise, LogQuery, User, UserId},
};

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TrackerStore for LocalStorageContext {
    // Users
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn create_user(&self, username: &str) -> Result<User> {
        Ok(users::create(&self.pool, username).await?)
    }

    async fn count_users(&self) -> Result<i64> {
        Ok(users::count(&self.pool).await?)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    // Exercises
    async fn create_exercise(&self, exercise: CreateExercise) -> Result<Exercise> {
        Ok(exercises::create(&self.pool, exercise).await?)
    }

    async fn get_exercises(&self, user_id: &UserId, query: &LogQuery) -> Result<Vec<Exercise>> {
        Ok(exercises::get_for_user(&self.pool, user_id, query).await?)
    }
}
