//! In-memory user repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{CreateUserInput, DomainError, UpdateUserInput, User, ENTITY_USER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a new user under a freshly assigned ID
    async fn create(&self, input: CreateUserInput) -> AppResult<User>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: i32, input: UpdateUserInput) -> AppResult<User>;

    /// Delete user by ID, returning the removed record
    async fn delete(&self, id: i32) -> AppResult<User>;

    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Process-memory implementation of UserRepository.
///
/// IDs start at 1 and are never reused, even after a delete. Once `i32::MAX`
/// has been handed out every further create fails.
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<i32, User>>,
    // Wider than the id so the counter can sit one past `i32::MAX`.
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    #[cfg(test)]
    fn starting_at(next_id: i32) -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(i64::from(next_id)),
        }
    }

    fn allocate_id(&self) -> AppResult<i32> {
        // Only advances while the current value is still a valid id.
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| {
                (id <= i64::from(i32::MAX)).then_some(id + 1)
            })
            .map_err(|_| AppError::internal("User id space exhausted"))?;
        i32::try_from(id).map_err(|_| AppError::internal("User id space exhausted"))
    }
}

fn user_not_found(id: i32) -> DomainError {
    DomainError::not_found(format!("{} {}", ENTITY_USER, id))
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, input: CreateUserInput) -> AppResult<User> {
        let id = self.allocate_id()?;
        let user = input.into_user(id);

        let mut users = self.users.write().await;
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: UpdateUserInput) -> AppResult<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or_else(|| user_not_found(id))?;
        user.apply(input);
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<User> {
        let mut users = self.users.write().await;
        users.remove(&id).ok_or_else(|| user_not_found(id).into())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}
