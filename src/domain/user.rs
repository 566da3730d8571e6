//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::{present, Entity};
use crate::config::ENTITY_USER;

/// User domain entity
///
/// The password is kept as supplied but never serialized; clients only
/// ever see a [`UserResponse`].
#[derive(Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User display name
    #[schema(example = "Test User")]
    pub name: String,
    /// User email address (format is not checked)
    #[schema(example = "test@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "testpassword123")]
    pub password: String,
}

/// User update data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[serde(default, deserialize_with = "present")]
    #[schema(example = "Updated User")]
    pub name: Option<String>,
    /// New email address
    #[serde(default, deserialize_with = "present")]
    #[schema(example = "updated@example.com")]
    pub email: Option<String>,
    /// New password
    #[serde(default, deserialize_with = "present")]
    pub password: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl Entity for User {
    const KIND: &'static str = ENTITY_USER;

    type Create = CreateUser;
    type Update = UpdateUser;

    fn from_create(id: i64, created_at: DateTime<Utc>, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            password: input.password,
            created_at,
        }
    }

    fn apply(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
    }
}
