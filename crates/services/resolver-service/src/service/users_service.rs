//! Users service - create/read/update/delete over user records.
//!
//! Two implementations: `CannedUsersService` answers every operation with
//! the same hardcoded record, `StoredUsersService` acts on a repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::{AppResult, OptionExt};
use domain::{CreateUserInput, UpdateUserInput, User};

use crate::repository::UserRepository;

/// ID of the canned record
pub const CANNED_USER_ID: i32 = 12345;

/// Name of the canned record
pub const CANNED_USER_NAME: &str = "name";

/// Email of the canned record
pub const CANNED_USER_EMAIL: &str = "test@test.com";

/// The single record returned by `CannedUsersService`.
pub fn canned_user() -> User {
    User::new(CANNED_USER_ID, CANNED_USER_NAME, CANNED_USER_EMAIL)
}

/// Users service trait for dependency injection.
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Create a user from the input
    async fn create(&self, input: CreateUserInput) -> AppResult<User>;

    /// List all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn find_one(&self, id: i32) -> AppResult<User>;

    /// Update user by ID with the fields present in the input
    async fn update(&self, id: i32, input: UpdateUserInput) -> AppResult<User>;

    /// Remove user by ID, returning the removed record
    async fn remove(&self, id: i32) -> AppResult<User>;
}

/// Ignores its inputs and returns the canned record from every operation.
///
/// Total and side-effect free: nothing is stored, changed or removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedUsersService;

impl CannedUsersService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UsersService for CannedUsersService {
    async fn create(&self, _input: CreateUserInput) -> AppResult<User> {
        Ok(canned_user())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(vec![canned_user()])
    }

    async fn find_one(&self, _id: i32) -> AppResult<User> {
        Ok(canned_user())
    }

    async fn update(&self, _id: i32, _input: UpdateUserInput) -> AppResult<User> {
        Ok(canned_user())
    }

    async fn remove(&self, _id: i32) -> AppResult<User> {
        Ok(canned_user())
    }
}

/// Concrete implementation of UsersService using a repository.
pub struct StoredUsersService {
    repo: Arc<dyn UserRepository>,
}

impl StoredUsersService {
    /// Create new users service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UsersService for StoredUsersService {
    async fn create(&self, input: CreateUserInput) -> AppResult<User> {
        let user = self.repo.create(input).await?;
        debug!(id = user.id, "Created user");
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn find_one(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: UpdateUserInput) -> AppResult<User> {
        // Nothing to change: answer from a read instead of taking the write lock.
        if input.is_empty() {
            debug!(id, "Update carries no changes");
            return self.find_one(id).await;
        }

        let user = self.repo.update(id, input).await?;
        debug!(id, "Updated user");
        Ok(user)
    }

    async fn remove(&self, id: i32) -> AppResult<User> {
        let user = self.repo.delete(id).await?;
        debug!(id, "Removed user");
        Ok(user)
    }
}
