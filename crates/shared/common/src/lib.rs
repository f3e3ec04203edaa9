//! Common utilities shared across the services.
//!
//! This crate provides:
//! - Unified error handling for the HTTP and GraphQL transports
//! - Configuration structures
//! - A health check route
//! - Tracing initialization

pub mod config;
pub mod error;
pub mod health;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use health::{health_routes, HealthResponse};
pub use telemetry::init_tracing;
