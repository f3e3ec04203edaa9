//! User shapes for both service variants.
//!
//! The directory variant exposes a contact address as `mail`, the resolver
//! variant as `email`. They are separate types because each service owns its
//! own record set and wire shape.

use serde::{Deserialize, Serialize};

/// User record served by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DirectoryUser {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Anakin Skywalker"))]
    pub name: String,
    /// Contact address
    #[cfg_attr(feature = "openapi", schema(example = "anakin@example.com"))]
    pub mail: String,
}

impl DirectoryUser {
    pub fn new(id: i32, name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mail: mail.into(),
        }
    }
}

/// User record served by the resolver service (GraphQL `User` type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Apply the fields present in a partial update.
    ///
    /// The `id` of the input is the lookup key and never changes the record.
    pub fn apply(&mut self, update: UpdateUserInput) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// GraphQL `CreateUserInput`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
}

impl CreateUserInput {
    /// Build the stored record for this input under the given id.
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// GraphQL `UpdateUserInput`: the target id plus optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUserInput {
    /// Check if the update carries no field changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
