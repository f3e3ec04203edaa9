//! User directory - read-only access to the seeded user records.

use once_cell::sync::Lazy;

use domain::DirectoryUser;

/// Records the directory is seeded with at process start, in insertion order.
static SEEDED_USERS: Lazy<Vec<DirectoryUser>> = Lazy::new(|| {
    vec![
        DirectoryUser::new(1, "Anakin Skywalker", "anakin@example.com"),
        DirectoryUser::new(2, "Luke Skywalker", "luke@example.com"),
    ]
});

/// Borrow the seeded records.
pub fn seeded_users() -> &'static [DirectoryUser] {
    &SEEDED_USERS
}

/// Directory trait for dependency injection.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// List every user in insertion order. Never fails.
    fn get_users(&self) -> Vec<DirectoryUser>;
}

/// Directory over the immutable seeded records.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededDirectory;

impl SeededDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl UserDirectory for SeededDirectory {
    fn get_users(&self) -> Vec<DirectoryUser> {
        seeded_users().to_vec()
    }
}
