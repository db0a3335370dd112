//! Stride Server Library
//!
//! Exercise tracking HTTP service: user registration, exercise recording,
//! and date-filtered exercise logs.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, WebSettings};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::{connect_store, TrackerService};
pub use state::AppState;
