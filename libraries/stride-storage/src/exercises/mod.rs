//! Exercise queries and log filtering

use crate::StorageError;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use stride_core::types::{CreateExercise, Exercise, ExerciseDate, ExerciseId, LogQuery, UserId};

type Result<T> = std::result::Result<T, StorageError>;

#[derive(sqlx::FromRow)]
struct ExerciseRow {
    id: ExerciseId,
    user_id: UserId,
    description: String,
    duration: i64,
    date: String,
    created_at: i64,
}

impl TryFrom<ExerciseRow> for Exercise {
    type Error = StorageError;

    fn try_from(row: ExerciseRow) -> Result<Self> {
        let date = ExerciseDate::from_iso_str(&row.date)
            .map_err(|e| StorageError::CorruptRow(format!("exercise {}: {}", row.id, e)))?;
        let created_at = DateTime::<Utc>::from_timestamp_millis(row.created_at).ok_or_else(|| {
            StorageError::CorruptRow(format!(
                "exercise {} has invalid created_at {}",
                row.id, row.created_at
            ))
        })?;

        Ok(Exercise {
            id: row.id,
            user_id: row.user_id,
            description: row.description,
            duration: row.duration,
            date,
            created_at,
        })
    }
}

/// Insert a new exercise entry
///
/// Does not check that `user_id` exists; the caller resolves the user.
pub async fn create(pool: &SqlitePool, exercise: CreateExercise) -> Result<Exercise> {
    let exercise = exercise.into_exercise();

    sqlx::query(
        "INSERT INTO exercises (id, user_id, description, duration, date, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&exercise.id)
    .bind(&exercise.user_id)
    .bind(&exercise.description)
    .bind(exercise.duration)
    .bind(exercise.date.to_iso_string())
    .bind(exercise.created_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(exercise)
}

/// Get a user's exercises matching `query`
///
/// Ordered by date, then creation time, then insertion order.
pub async fn get_for_user(
    pool: &SqlitePool,
    user_id: &UserId,
    query: &LogQuery,
) -> Result<Vec<Exercise>> {
    let mut builder = log_filter(user_id, query);
    let rows: Vec<ExerciseRow> = builder.build_query_as().fetch_all(pool).await?;

    rows.into_iter().map(Exercise::try_from).collect()
}

/// Build the log SELECT.
///
/// Dates are stored as `YYYY-MM-DD` with four-digit years, so text comparison
/// is calendar order and both bounds can be inclusive. Rows inserted within the
/// same millisecond fall back to `rowid`, which only grows.
fn log_filter<'a>(user_id: &'a UserId, query: &LogQuery) -> QueryBuilder<'a, Sqlite> {
    let mut builder = QueryBuilder::new(
        "SELECT id, user_id, description, duration, date, created_at FROM exercises WHERE user_id = ",
    );
    builder.push_bind(user_id);

    if let Some(from) = query.from {
        builder.push(" AND date >= ").push_bind(from.to_iso_string());
    }
    if let Some(to) = query.to {
        builder.push(" AND date <= ").push_bind(to.to_iso_string());
    }

    builder.push(" ORDER BY date ASC, created_at ASC, rowid ASC LIMIT ");
    builder.push_bind(i64::from(query.limit));

    builder
}
