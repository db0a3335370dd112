//! Domain types for Stride

mod date;
mod exercise;
mod ids;
mod log;
mod user;

pub use date::ExerciseDate;
pub use exercise::{CreateExercise, Exercise};
pub use ids::{ExerciseId, UserId};
pub use log::{ExerciseLog, LogEntry, LogQuery};
pub use user::User;
