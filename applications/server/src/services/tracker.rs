/// Tracker service - user registration, exercise recording, log queries
use std::sync::Arc;
use stride_core::{
    error::Result,
    types::{CreateExercise, Exercise, ExerciseLog, LogQuery, User, UserId},
    TrackerStore,
};

#[derive(Clone)]
pub struct TrackerService {
    store: Arc<dyn TrackerStore>,
}

impl TrackerService {
    pub fn new(store: Arc<dyn TrackerStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    /// Number of registered users; fails when the store is unreachable
    pub async fn user_count(&self) -> Result<i64> {
        self.store.count_users().await
    }

    pub async fn create_user(&self, username: &str) -> Result<User> {
        let user = self.store.create_user(username).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Record an exercise for an existing user.
    ///
    /// The user is resolved before anything is written, so an unknown id
    /// fails with `UserNotFound` and leaves the store untouched.
    pub async fn add_exercise(&self, exercise: CreateExercise) -> Result<(User, Exercise)> {
        let user = self.store.require_user(&exercise.user_id).await?;
        let exercise = self.store.create_exercise(exercise).await?;

        tracing::info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            date = %exercise.date,
            "exercise recorded"
        );
        Ok((user, exercise))
    }

    /// Filtered, limited log for one user
    pub async fn log(&self, user_id: &UserId, query: &LogQuery) -> Result<ExerciseLog> {
        let user = self.store.require_user(user_id).await?;
        let exercises = self.store.get_exercises(user_id, query).await?;
        Ok(ExerciseLog::new(user, exercises))
    }
}
