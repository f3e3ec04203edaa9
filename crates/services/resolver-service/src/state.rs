//! Application state for dependency injection.

use std::sync::Arc;

use crate::graphql::OperationRegistry;
use crate::service::UsersService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersService>,
    pub registry: Arc<OperationRegistry>,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UsersService>, registry: Arc<OperationRegistry>) -> Self {
        Self { users, registry }
    }
}
