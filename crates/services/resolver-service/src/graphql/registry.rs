//! Operation registry - maps GraphQL root fields to handlers.
//!
//! The table is built once at startup and shared read-only by all requests.
//! Query documents are parsed and walked by the executor, which looks each
//! root field up here.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{
    CreateUserInput, UpdateUserInput, OP_CREATE_USER, OP_REMOVE_USER, OP_UPDATE_USER, OP_USER,
    OP_USERS,
};

use super::envelope::{GraphQlRequest, GraphQlResponse};
use super::executor;
use crate::service::UsersService;

/// Future returned by an operation handler.
pub type OperationFuture = BoxFuture<'static, AppResult<Value>>;

/// Handler resolving one root field from its arguments.
pub type OperationHandler = fn(Arc<dyn UsersService>, Value) -> OperationFuture;

/// Root type a field hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootType {
    Query,
    Mutation,
}

impl RootType {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

/// Registered root field.
#[derive(Clone, Copy)]
pub struct RootField {
    pub root: RootType,
    pub handler: OperationHandler,
}

/// Table from root field name to handler.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    fields: HashMap<&'static str, RootField>,
}

impl OperationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every user operation of the schema.
    pub fn users() -> Self {
        let mut registry = Self::new();
        registry
            .register(OP_USERS, RootType::Query, users)
            .register(OP_USER, RootType::Query, user)
            .register(OP_CREATE_USER, RootType::Mutation, create_user)
            .register(OP_UPDATE_USER, RootType::Mutation, update_user)
            .register(OP_REMOVE_USER, RootType::Mutation, remove_user);
        registry
    }

    /// Register a handler, replacing any previous one under the same name
    pub fn register(
        &mut self,
        name: &'static str,
        root: RootType,
        handler: OperationHandler,
    ) -> &mut Self {
        self.fields.insert(name, RootField { root, handler });
        self
    }

    pub fn get(&self, name: &str) -> Option<RootField> {
        self.fields.get(name).copied()
    }

    /// Registered field names, sorted
    pub fn operation_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.fields.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run a request and wrap the outcome in a GraphQL envelope.
    pub async fn execute(
        &self,
        service: Arc<dyn UsersService>,
        request: GraphQlRequest,
    ) -> GraphQlResponse {
        let operation = request.operation_name.clone();
        match executor::execute(self, service, request).await {
            Ok(data) => {
                debug!(operation = ?operation, fields = data.len(), "Request executed");
                GraphQlResponse::data(data)
            }
            Err(err) => {
                warn!(operation = ?operation, code = err.code(), "Request failed: {}", err);
                GraphQlResponse::error(&err)
            }
        }
    }
}

// =============================================================================
// Operation Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserArgs {
    create_user_input: CreateUserInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserArgs {
    update_user_input: UpdateUserInput,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: i32,
}

/// Deserialize operation variables; absent variables read as `{}`.
fn parse_variables<T: DeserializeOwned>(variables: Value) -> AppResult<T> {
    let variables = match variables {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(variables)
        .map_err(|e| AppError::validation(format!("Invalid variables: {}", e)))
}

fn to_data<T: Serialize>(value: T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(e.to_string()))
}

// =============================================================================
// Handlers
// =============================================================================

fn create_user(service: Arc<dyn UsersService>, variables: Value) -> OperationFuture {
    async move {
        let args: CreateUserArgs = parse_variables(variables)?;
        to_data(service.create(args.create_user_input).await?)
    }
    .boxed()
}

fn users(service: Arc<dyn UsersService>, _variables: Value) -> OperationFuture {
    async move { to_data(service.find_all().await?) }.boxed()
}

fn user(service: Arc<dyn UsersService>, variables: Value) -> OperationFuture {
    async move {
        let args: IdArgs = parse_variables(variables)?;
        to_data(service.find_one(args.id).await?)
    }
    .boxed()
}

fn update_user(service: Arc<dyn UsersService>, variables: Value) -> OperationFuture {
    async move {
        let args: UpdateUserArgs = parse_variables(variables)?;
        let id = args.update_user_input.id;
        to_data(service.update(id, args.update_user_input).await?)
    }
    .boxed()
}

fn remove_user(service: Arc<dyn UsersService>, variables: Value) -> OperationFuture {
    async move {
        let args: IdArgs = parse_variables(variables)?;
        to_data(service.remove(args.id).await?)
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use async_graphql_parser::parse_schema;
    use async_graphql_parser::types::{TypeKind, TypeSystemDefinition};
    use serde_json::json;

    use super::*;
    use crate::graphql::SCHEMA_SDL;
    use crate::service::{canned_user, CannedUsersService};

    fn canned() -> Arc<dyn UsersService> {
        Arc::new(CannedUsersService::new())
    }

    /// Field names declared on a root object type of the schema
    fn schema_fields(type_name: &str) -> Vec<String> {
        let document = parse_schema(SCHEMA_SDL).unwrap();
        document
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                TypeSystemDefinition::Type(ty) if ty.node.name.node.as_str() == type_name => {
                    match &ty.node.kind {
                        TypeKind::Object(object) => Some(
                            object
                                .fields
                                .iter()
                                .map(|field| field.node.name.node.to_string())
                                .collect::<Vec<_>>(),
                        ),
                        _ => None,
                    }
                }
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn test_users_registry_has_every_operation() {
        let registry = OperationRegistry::users();

        assert_eq!(
            registry.operation_names(),
            vec!["createUser", "removeUser", "updateUser", "user", "users"]
        );
    }

    #[test]
    fn test_every_field_is_declared_on_its_schema_root() {
        let registry = OperationRegistry::users();
        for name in registry.operation_names() {
            let root = registry.get(name).unwrap().root;
            assert!(
                schema_fields(root.type_name()).iter().any(|field| field == name),
                "{} missing from type {}",
                name,
                root.type_name()
            );
        }
    }

    #[test]
    fn test_schema_declares_no_unregistered_root_fields() {
        let registry = OperationRegistry::users();
        for root in [RootType::Query, RootType::Mutation] {
            for field in schema_fields(root.type_name()) {
                assert_eq!(
                    registry.get(&field).map(|entry| entry.root),
                    Some(root),
                    "{}.{} has no handler",
                    root.type_name(),
                    field
                );
            }
        }
    }

    #[tokio::test]
    async fn test_remove_user_returns_canned_record() {
        let response = OperationRegistry::users()
            .execute(
                canned(),
                GraphQlRequest::new(
                    "mutation { removeUser(id: 1) { id name email } }",
                    Value::Null,
                ),
            )
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.unwrap()["removeUser"],
            serde_json::to_value(canned_user()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_query_is_bad_request() {
        let response = OperationRegistry::users()
            .execute(canned(), GraphQlRequest::default())
            .await;

        assert!(response.data.is_none());
        assert_eq!(response.errors[0].extensions.code, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_wrong_id_type_is_validation_error() {
        let response = OperationRegistry::users()
            .execute(
                canned(),
                GraphQlRequest::new(
                    "query Find($id: Int!) { user(id: $id) { id } }",
                    json!({ "id": "abc" }),
                ),
            )
            .await;

        assert_eq!(response.errors[0].extensions.code, "VALIDATION_ERROR");
        assert!(response.errors[0].message.starts_with("Invalid variables"));
    }

    #[tokio::test]
    async fn test_empty_registry_rejects_everything() {
        let response = OperationRegistry::new()
            .execute(canned(), GraphQlRequest::new("{ users { id } }", Value::Null))
            .await;

        assert_eq!(response.errors[0].extensions.code, "BAD_REQUEST");
    }
}
