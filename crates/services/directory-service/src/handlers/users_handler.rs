//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use tracing::debug;

use domain::DirectoryUser;

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(get_users))
}

/// List all users
#[utoipa::path(
    get,
    path = "/",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<DirectoryUser>)
    )
)]
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<DirectoryUser>> {
    let users = state.directory.get_users();
    debug!(count = users.len(), "Listing directory users");
    Json(users)
}
