//! Schema definition served alongside the endpoint.

/// SDL of the users schema; the Rust shapes in `domain` mirror its types.
pub const SCHEMA_SDL: &str = include_str!("../../schema/users.graphql");
