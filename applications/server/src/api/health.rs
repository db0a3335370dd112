/// Liveness and store reachability
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Registered users, read from the store on every call
    pub users: i64,
}

/// GET /api/health
/// 200 while the store answers queries, 503 otherwise
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let users = app_state.tracker.user_count().await.map_err(|e| {
        tracing::warn!("health check failed: {}", e);
        ServerError::Unavailable("Store unreachable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        users,
    }))
}
