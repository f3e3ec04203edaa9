//! GraphQL transport: envelopes, query execution, the operation registry and
//! the schema.

mod envelope;
mod executor;
mod registry;
mod schema;

pub use envelope::{ErrorExtensions, GraphQlError, GraphQlRequest, GraphQlResponse};
pub use registry::{OperationFuture, OperationHandler, OperationRegistry, RootField, RootType};
pub use schema::SCHEMA_SDL;
