//! Domain-level constants.
//!
//! Root field names are shared between the GraphQL schema and the resolver's
//! operation registry, so both sides agree on the wire names.

// =============================================================================
// GraphQL Operations
// =============================================================================

/// Mutation creating a user from `createUserInput`
pub const OP_CREATE_USER: &str = "createUser";

/// Query listing all users
pub const OP_USERS: &str = "users";

/// Query fetching a single user by `id`
pub const OP_USER: &str = "user";

/// Mutation updating a user from `updateUserInput`
pub const OP_UPDATE_USER: &str = "updateUser";

/// Mutation removing a user by `id`
pub const OP_REMOVE_USER: &str = "removeUser";

// =============================================================================
// Entities
// =============================================================================

/// Entity name used in not-found messages
pub const ENTITY_USER: &str = "User";
