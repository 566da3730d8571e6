//! Application state - Dependency injection container.
//!
//! The router never reaches for process-wide storage: whoever builds the
//! router decides which services (and therefore which stores) it talks to.

use std::sync::Arc;

use crate::services::{ProductService, ServiceContainer, Services, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Product service
    pub product_service: Arc<dyn ProductService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// State backed by fresh in-memory stores holding the sample data.
    pub fn in_memory() -> Self {
        Self::from_container(&Services::in_memory())
    }

    /// State drawing its services from a container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            product_service: container.products(),
            user_service: container.users(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(product_service: Arc<dyn ProductService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            product_service,
            user_service,
        }
    }
}
