/// API route modules
pub mod exercises;
pub mod extract;
pub mod health;
pub mod logs;
pub mod users;

use crate::error::ServerError;
use axum::http::Uri;

/// Fallback for unmatched routes, in the same envelope as every other error
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("no route for {}", uri.path()))
}
