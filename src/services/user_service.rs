//! User service - Handles user-related business logic.
//!
//! Returns full `User` records; the API layer projects them to
//! `UserResponse` before anything leaves the process.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;
use crate::infra::EntityStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Register a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Update user details (only supplied fields change)
    async fn update_user(&self, id: i64, update: UpdateUser) -> AppResult<User>;

    /// Permanently remove a user
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService over an in-memory store.
pub struct UserManager {
    store: Arc<EntityStore<User>>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(store: Arc<EntityStore<User>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.store.get(id)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.store.get_all())
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let user = self.store.create(input);
        tracing::info!(id = user.id, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: i64, update: UpdateUser) -> AppResult<User> {
        self.store.update(id, update)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.store.delete(id)?;
        tracing::info!(id, "user deleted");
        Ok(())
    }
}
