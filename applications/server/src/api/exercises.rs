/// Exercises API routes
use crate::{
    api::extract::{ApiPath, FormOrJson, IntField},
    error::Result,
    state::AppState,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use stride_core::types::{CreateExercise, ExerciseDate, UserId};

#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub description: String,
    pub duration: IntField,
    /// Blank or missing means today
    #[serde(default)]
    pub date: Option<String>,
}

/// The owning user's `_id` and username plus the recorded entry
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: ExerciseDate,
}

/// POST /api/users/:id/exercises
/// Record an exercise for an existing user
pub async fn create_exercise(
    ApiPath(user_id): ApiPath<String>,
    State(app_state): State<AppState>,
    FormOrJson(req): FormOrJson<CreateExerciseRequest>,
) -> Result<Json<ExerciseResponse>> {
    let duration = req.duration.parse("duration")?;
    let date = ExerciseDate::parse_optional(req.date.as_deref())?;

    let mut create = CreateExercise::new(UserId::new(user_id), req.description, duration);
    create.date = date;

    let (user, exercise) = app_state.tracker.add_exercise(create).await?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: exercise.date,
    }))
}
