//! Route configuration.

use axum::Router;
use common::health_routes;

use crate::config::SERVICE_NAME;
use crate::handlers::graphql_routes;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/graphql", graphql_routes())
        .nest("/health", health_routes(SERVICE_NAME))
        .with_state(state)
}
