//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::DirectoryUser;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::users_handler::get_users),
    components(schemas(DirectoryUser)),
    tags((name = "Users", description = "Read-only user directory"))
)]
pub struct ApiDoc;
