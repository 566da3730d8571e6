//! Service Container - Centralized service access.
//!
//! Owns one service per entity type. Each container built with
//! `in_memory()` gets its own freshly seeded stores, so two containers
//! never share records.

use std::sync::Arc;

use super::{ProductManager, ProductService, UserManager, UserService};
use crate::infra::{seed, EntityStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    product_service: Arc<dyn ProductService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(
        product_service: Arc<dyn ProductService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            product_service,
            user_service,
        }
    }

    /// Create a service container backed by new stores holding the sample data
    pub fn in_memory() -> Self {
        let products = Arc::new(EntityStore::seeded(seed::sample_products()));
        let users = Arc::new(EntityStore::seeded(seed::sample_users()));

        Self::new(
            Arc::new(ProductManager::new(products)),
            Arc::new(UserManager::new(users)),
        )
    }
}

impl ServiceContainer for Services {
    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateUser, UpdateProduct};

    #[tokio::test]
    async fn test_in_memory_starts_with_samples() {
        let services = Services::in_memory();

        assert_eq!(services.products().list_products().await.unwrap().len(), 3);
        assert_eq!(services.users().list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_containers_are_isolated() {
        let first = Services::in_memory();
        let second = Services::in_memory();

        first
            .users()
            .create_user(CreateUser {
                name: "Only Here".to_string(),
                email: "here@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(first.users().list_users().await.unwrap().len(), 4);
        assert_eq!(second.users().list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_services_share_one_store() {
        let services = Services::in_memory();
        services
            .products()
            .update_product(
                1,
                UpdateProduct {
                    in_stock: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let product = services.products().get_product(1).await.unwrap();
        assert!(!product.in_stock);
    }
}
