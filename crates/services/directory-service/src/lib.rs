//! Directory Service Library
//!
//! Serves the seeded user directory over REST. It can be run as a standalone
//! service or embedded in the combined binary.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::ServiceConfig;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;
use crate::service::{SeededDirectory, UserDirectory};
use crate::state::AppState;

/// Build the application router around a directory.
pub fn build_app(directory: Arc<dyn UserDirectory>) -> Router {
    create_router(AppState::new(directory)).layer(TraceLayer::new_for_http())
}

/// Run the directory service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config::from_env();
    config.host = host.to_string();
    config.port = port;

    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let directory: Arc<dyn UserDirectory> = Arc::new(SeededDirectory::new());
    let app = build_app(directory);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("{} listening on {}", config.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
