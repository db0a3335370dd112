/// Exercise log API routes
use crate::{
    api::extract::{ApiPath, ApiQuery},
    error::Result,
    state::AppState,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use stride_core::types::{LogEntry, LogQuery, UserId};

/// Raw query string; parsed into a [`LogQuery`]
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    /// Entries returned, after filtering and limiting
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// GET /api/users/:id/logs?from&to&limit
/// A user's exercises within an inclusive date range, oldest first
pub async fn get_logs(
    ApiPath(user_id): ApiPath<String>,
    State(app_state): State<AppState>,
    ApiQuery(params): ApiQuery<LogParams>,
) -> Result<Json<LogResponse>> {
    let query = LogQuery::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;

    let log = app_state
        .tracker
        .log(&UserId::new(user_id), &query)
        .await?;

    Ok(Json(LogResponse {
        count: log.count(),
        id: log.user.id,
        username: log.user.username,
        log: log.entries,
    }))
}
