//! Query document execution.
//!
//! Parses the request's `query`, picks the operation, resolves each root field
//! through the [`OperationRegistry`] and shapes the results by the field's
//! selection set. Every object the resolvers return is a `User`, so nested
//! selections are checked against the resolved JSON rather than a type system.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql_parser::parse_query;
use async_graphql_parser::types::{
    DocumentOperations, ExecutableDocument, Field, FragmentDefinition, OperationDefinition,
    OperationType, Selection, SelectionSet, VariableDefinition,
};
use async_graphql_parser::Positioned;
use async_graphql_value::{ConstValue, Name, Value as GqlValue};
use serde_json::{Map, Value};
use tracing::debug;

use common::{AppError, AppResult};
use domain::ENTITY_USER;

use super::envelope::GraphQlRequest;
use super::registry::{OperationRegistry, RootType};
use crate::service::UsersService;

type Fragments = HashMap<Name, Positioned<FragmentDefinition>>;

const TYPENAME: &str = "__typename";

/// Nesting limit for selection sets and fragment spreads
const MAX_SELECTION_DEPTH: usize = 16;

/// Execute a request; the returned map becomes the response's `data`.
pub(super) async fn execute(
    registry: &OperationRegistry,
    service: Arc<dyn UsersService>,
    request: GraphQlRequest,
) -> AppResult<Map<String, Value>> {
    let query = request
        .query
        .as_deref()
        .filter(|query| !query.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("query is required"))?;

    let document: ExecutableDocument =
        parse_query(query).map_err(|e| AppError::bad_request(format!("Syntax error: {}", e)))?;
    let operation = select_operation(&document.operations, request.operation_name.as_deref())?;
    let root = root_type(operation.ty)?;
    let variables = Variables::new(&operation.variable_definitions, request.variables)?;

    let mut data = Map::new();
    for field in collect_fields(&operation.selection_set.node, &document.fragments, 0)? {
        let name = field.name.node.as_str();
        if name == TYPENAME {
            data.insert(response_key(field), Value::String(root.type_name().to_string()));
            continue;
        }

        let entry = registry
            .get(name)
            .filter(|entry| entry.root == root)
            .ok_or_else(|| {
                AppError::bad_request(format!(
                    "Unknown field '{}' on type {}",
                    name,
                    root.type_name()
                ))
            })?;

        debug!(field = name, root = root.type_name(), "Resolving root field");
        let arguments = variables.arguments(&field.arguments)?;
        let value = (entry.handler)(service.clone(), arguments).await?;
        data.insert(
            response_key(field),
            project(value, field, &document.fragments, 1)?,
        );
    }

    Ok(data)
}

// =============================================================================
// Operation Selection
// =============================================================================

fn select_operation<'a>(
    operations: &'a DocumentOperations,
    operation_name: Option<&str>,
) -> AppResult<&'a OperationDefinition> {
    match operations {
        DocumentOperations::Single(operation) => Ok(&operation.node),
        DocumentOperations::Multiple(named) => match operation_name {
            Some(wanted) => named
                .iter()
                .find(|(name, _)| name.as_str() == wanted)
                .map(|(_, operation)| &operation.node)
                .ok_or_else(|| {
                    AppError::bad_request(format!("Unknown operation named '{}'", wanted))
                }),
            None if named.len() == 1 => named
                .values()
                .next()
                .map(|operation| &operation.node)
                .ok_or_else(|| AppError::bad_request("Document has no operations")),
            None => Err(AppError::bad_request(
                "operationName is required when the document has several operations",
            )),
        },
    }
}

fn root_type(ty: OperationType) -> AppResult<RootType> {
    match ty {
        OperationType::Query => Ok(RootType::Query),
        OperationType::Mutation => Ok(RootType::Mutation),
        OperationType::Subscription => Err(AppError::bad_request("Subscriptions are not supported")),
    }
}

// =============================================================================
// Variables and Arguments
// =============================================================================

struct Variables(HashMap<Name, ConstValue>);

impl Variables {
    /// Supplied values, with declared defaults filling the gaps
    fn new(definitions: &[Positioned<VariableDefinition>], supplied: Value) -> AppResult<Self> {
        let mut values = HashMap::new();
        match supplied {
            Value::Null => {}
            Value::Object(map) => {
                for (name, value) in map {
                    let value = ConstValue::from_json(value)
                        .map_err(|e| AppError::validation(format!("Invalid variables: {}", e)))?;
                    values.insert(Name::new(name), value);
                }
            }
            _ => return Err(AppError::validation("Invalid variables: expected an object")),
        }

        for definition in definitions {
            let definition = &definition.node;
            if let Some(default) = &definition.default_value {
                values
                    .entry(definition.name.node.clone())
                    .or_insert_with(|| default.node.clone());
            }
        }

        Ok(Self(values))
    }

    /// Field arguments as a JSON object with every `$variable` substituted
    fn arguments(&self, arguments: &[(Positioned<Name>, Positioned<GqlValue>)]) -> AppResult<Value> {
        let mut resolved = Map::new();
        for (name, value) in arguments {
            let value = value.node.clone().into_const_with(|variable| {
                self.0.get(&variable).cloned().ok_or_else(|| {
                    AppError::validation(format!("Variable ${} is not defined", variable))
                })
            })?;
            let value = value
                .into_json()
                .map_err(|e| AppError::validation(format!("Invalid argument: {}", e)))?;
            resolved.insert(name.node.to_string(), value);
        }
        Ok(Value::Object(resolved))
    }
}

// =============================================================================
// Selection Sets
// =============================================================================

/// Flatten a selection set into its fields, expanding fragments.
///
/// Type conditions are not checked: each level has exactly one object type.
fn collect_fields<'a>(
    selection_set: &'a SelectionSet,
    fragments: &'a Fragments,
    depth: usize,
) -> AppResult<Vec<&'a Field>> {
    if depth > MAX_SELECTION_DEPTH {
        return Err(AppError::bad_request("Selection nesting is too deep"));
    }

    let mut fields = Vec::new();
    for selection in &selection_set.items {
        match &selection.node {
            Selection::Field(field) => {
                reject_directives(field.node.directives.is_empty())?;
                fields.push(&field.node);
            }
            Selection::InlineFragment(fragment) => {
                reject_directives(fragment.node.directives.is_empty())?;
                fields.extend(collect_fields(
                    &fragment.node.selection_set.node,
                    fragments,
                    depth + 1,
                )?);
            }
            Selection::FragmentSpread(spread) => {
                reject_directives(spread.node.directives.is_empty())?;
                let name = &spread.node.fragment_name.node;
                let fragment = fragments.get(name).ok_or_else(|| {
                    AppError::bad_request(format!("Unknown fragment '{}'", name))
                })?;
                fields.extend(collect_fields(
                    &fragment.node.selection_set.node,
                    fragments,
                    depth + 1,
                )?);
            }
        }
    }
    Ok(fields)
}

fn reject_directives(none_present: bool) -> AppResult<()> {
    if none_present {
        Ok(())
    } else {
        Err(AppError::bad_request("Directives are not supported"))
    }
}

/// Keep only the selected fields of a resolved value, under their response keys.
fn project(value: Value, field: &Field, fragments: &Fragments, depth: usize) -> AppResult<Value> {
    let selection_set = &field.selection_set.node;
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| project(item, field, fragments, depth))
            .collect::<AppResult<Vec<_>>>()
            .map(Value::Array),
        Value::Object(object) => {
            if selection_set.items.is_empty() {
                return Err(AppError::bad_request(format!(
                    "Field '{}' of type {} must have a selection of subfields",
                    field.name.node, ENTITY_USER
                )));
            }

            let mut shaped = Map::new();
            for selected in collect_fields(selection_set, fragments, depth)? {
                let name = selected.name.node.as_str();
                let value = if name == TYPENAME {
                    Value::String(ENTITY_USER.to_string())
                } else {
                    object.get(name).cloned().ok_or_else(|| {
                        AppError::bad_request(format!(
                            "Cannot query field '{}' on type {}",
                            name, ENTITY_USER
                        ))
                    })?
                };
                if !selected.selection_set.node.items.is_empty() {
                    return Err(AppError::bad_request(format!(
                        "Field '{}' is a scalar and takes no subfields",
                        name
                    )));
                }
                shaped.insert(response_key(selected), value);
            }
            Ok(Value::Object(shaped))
        }
        scalar => Ok(scalar),
    }
}

fn response_key(field: &Field) -> String {
    field
        .alias
        .as_ref()
        .map(|alias| alias.node.to_string())
        .unwrap_or_else(|| field.name.node.to_string())
}
