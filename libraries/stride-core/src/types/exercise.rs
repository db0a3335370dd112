/// Exercise domain types
use super::{ExerciseDate, ExerciseId, UserId};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded exercise.
///
/// `user_id` is a weak reference: it is checked when the entry is created
/// and never again, so an entry may outlive its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub user_id: UserId,
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    pub date: ExerciseDate,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new exercise entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExercise {
    pub user_id: UserId,
    pub description: String,
    pub duration: i64,
    /// Calendar date of the exercise; today when absent
    pub date: Option<ExerciseDate>,
}

impl CreateExercise {
    pub fn new(user_id: UserId, description: impl Into<String>, duration: i64) -> Self {
        Self {
            user_id,
            description: description.into(),
            duration,
            date: None,
        }
    }

    #[must_use]
    pub fn on(mut self, date: ExerciseDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Materialize the entry with a fresh id and the creation timestamp
    pub fn into_exercise(self) -> Exercise {
        Exercise {
            id: ExerciseId::generate(),
            user_id: self.user_id,
            description: self.description,
            duration: self.duration,
            date: self.date.unwrap_or_else(ExerciseDate::today),
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}
