mod directory;

pub use directory::{seeded_users, SeededDirectory, UserDirectory};

#[cfg(test)]
pub use directory::MockUserDirectory;
