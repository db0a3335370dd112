//! Exercise log queries and results

use super::{Exercise, ExerciseDate, User};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Filter for a user's exercise log.
///
/// Both bounds are inclusive and independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQuery {
    pub from: Option<ExerciseDate>,
    pub to: Option<ExerciseDate>,
    pub limit: u32,
}

impl LogQuery {
    /// Number of entries returned when no usable limit is given
    pub const DEFAULT_LIMIT: u32 = 500;

    /// Build a query from raw query-string values.
    ///
    /// Unparseable `from`/`to` values are rejected. A `limit` that is
    /// missing, non-numeric, or below 1 falls back to [`Self::DEFAULT_LIMIT`].
    pub fn parse(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Result<Self> {
        Ok(Self {
            from: ExerciseDate::parse_optional(from)?,
            to: ExerciseDate::parse_optional(to)?,
            limit: parse_limit(limit),
        })
    }

    #[must_use]
    pub fn from_date(mut self, date: ExerciseDate) -> Self {
        self.from = Some(date);
        self
    }

    #[must_use]
    pub fn to_date(mut self, date: ExerciseDate) -> Self {
        self.to = Some(date);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = if limit == 0 { Self::DEFAULT_LIMIT } else { limit };
        self
    }

    /// Whether `date` falls inside the query's range
    pub fn contains(&self, date: ExerciseDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn has_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn parse_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .map_or(LogQuery::DEFAULT_LIMIT, |n| {
            u32::try_from(n).unwrap_or(u32::MAX)
        })
}

/// One line of a user's log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: ExerciseDate,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Filtered, limited log for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<LogEntry>,
}

impl ExerciseLog {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        Self {
            user,
            entries: exercises.into_iter().map(LogEntry::from).collect(),
        }
    }

    /// Number of returned entries, not the user's total
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
