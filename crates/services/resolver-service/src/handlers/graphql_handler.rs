//! GraphQL handlers.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use crate::extractors::JsonBody;
use crate::graphql::{GraphQlRequest, GraphQlResponse, SCHEMA_SDL};
use crate::state::AppState;

/// Create GraphQL routes
pub fn graphql_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(execute))
        .route("/schema", get(schema))
}

/// Execute a query document. Failures travel in the `errors` array with HTTP 200.
pub async fn execute(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GraphQlRequest>,
) -> Json<GraphQlResponse> {
    Json(state.registry.execute(state.users.clone(), request).await)
}

/// Serve the schema SDL
pub async fn schema() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], SCHEMA_SDL)
}
