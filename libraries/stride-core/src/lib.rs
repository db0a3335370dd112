//! Stride Core
//!
//! Storage-agnostic domain types, the store trait, and error handling for
//! the Stride exercise tracker.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Exercise`, `ExerciseDate`, `LogQuery`
//! - **Core Traits**: `TrackerStore`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use stride_core::types::{ExerciseDate, LogQuery};
//!
//! let date = ExerciseDate::parse("2023-01-15").unwrap();
//! assert_eq!(date.to_string(), "Sun Jan 15 2023");
//!
//! let query = LogQuery::parse(Some("2023-01-01"), None, Some("10")).unwrap();
//! assert_eq!(query.limit, 10);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::TrackerStore;

pub use types::{
    CreateExercise, Exercise, ExerciseDate, ExerciseId, ExerciseLog, LogEntry, LogQuery, User,
    UserId,
};
