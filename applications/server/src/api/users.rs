/// Users API routes
use crate::{api::extract::FormOrJson, error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use stride_core::types::{User, UserId};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// `{_id, username}` projection of a user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// GET /api/users
/// List all users; an empty store is an empty array
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = app_state.tracker.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users
/// Register a user. Usernames are not checked for uniqueness.
pub async fn create_user(
    State(app_state): State<AppState>,
    FormOrJson(req): FormOrJson<CreateUserRequest>,
) -> Result<Json<UserResponse>> {
    let user = app_state.tracker.create_user(&req.username).await?;
    Ok(Json(user.into()))
}
