//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use common::AppError;

/// Incoming GraphQL request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    /// Query document to execute
    #[serde(default)]
    pub query: Option<String>,
    /// Picks the operation when the document defines several
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    /// Values for the document's `$variables`
    #[serde(default)]
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: Some(query.into()),
            operation_name: None,
            variables,
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// GraphQL response body: `data` on success, `errors` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Successful response; `data` maps response keys to resolved values
    pub fn data(data: Map<String, Value>) -> Self {
        Self {
            data: Some(Value::Object(data)),
            errors: Vec::new(),
        }
    }

    /// Failed response carrying a single error
    pub fn error(err: &AppError) -> Self {
        Self {
            data: None,
            errors: vec![GraphQlError::from(err)],
        }
    }
}

/// Single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    pub extensions: ErrorExtensions,
}

/// Machine-readable error details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    pub code: String,
}

impl From<&AppError> for GraphQlError {
    fn from(err: &AppError) -> Self {
        Self {
            message: err.user_message(),
            extensions: ErrorExtensions {
                code: err.code().to_string(),
            },
        }
    }
}
