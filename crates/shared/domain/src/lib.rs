//! Domain layer - user shapes shared by the service variants.
//!
//! This crate holds plain data definitions with no infrastructure
//! dependencies. The resolver's GraphQL schema and its service layer both
//! speak these types.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{CreateUserInput, DirectoryUser, UpdateUserInput, User};
