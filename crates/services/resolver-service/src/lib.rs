//! Resolver Service Library
//!
//! Answers the users GraphQL operations. It can be run as a standalone
//! service or embedded in the combined binary.

pub mod config;
pub mod extractors;
pub mod graphql;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Backend, ResolverServiceConfig};
use crate::graphql::OperationRegistry;
use crate::repository::InMemoryUserStore;
use crate::routes::create_router;
use crate::service::{CannedUsersService, StoredUsersService, UsersService};
use crate::state::AppState;

/// Construct the users service for a backend.
pub fn build_users_service(backend: Backend) -> Arc<dyn UsersService> {
    match backend {
        Backend::Canned => Arc::new(CannedUsersService::new()),
        Backend::Memory => {
            let repo = Arc::new(InMemoryUserStore::new());
            Arc::new(StoredUsersService::new(repo))
        }
    }
}

/// Build the application router around a users service.
pub fn build_app(users: Arc<dyn UsersService>) -> Router {
    let registry = Arc::new(OperationRegistry::users());
    create_router(AppState::new(users, registry)).layer(TraceLayer::new_for_http())
}

/// Run the resolver service as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    backend: Backend,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ResolverServiceConfig::from_env(backend);
    config.service.host = host.to_string();
    config.service.port = port;

    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    config: ResolverServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(build_users_service(config.backend));

    let addr: SocketAddr = config.service.bind_addr().parse()?;
    info!(
        backend = ?config.backend,
        "{} listening on {}", config.service.service_name, addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
