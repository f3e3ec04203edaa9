//! Route configuration.

use axum::Router;
use common::health_routes;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::SERVICE_NAME;
use crate::handlers::user_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .nest("/health", health_routes(SERVICE_NAME))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
