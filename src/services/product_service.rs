//! Product service - Product catalogue use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateProduct, Product, UpdateProduct};
use crate::errors::AppResult;
use crate::infra::EntityStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List every product in creation order
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    async fn get_product(&self, id: i64) -> AppResult<Product>;

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product>;

    /// Apply a partial update; absent fields are left untouched
    async fn update_product(&self, id: i64, update: UpdateProduct) -> AppResult<Product>;

    async fn delete_product(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProductService over an in-memory store.
pub struct ProductManager {
    store: Arc<EntityStore<Product>>,
}

impl ProductManager {
    pub fn new(store: Arc<EntityStore<Product>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.store.get_all())
    }

    async fn get_product(&self, id: i64) -> AppResult<Product> {
        self.store.get(id)
    }

    async fn create_product(&self, input: CreateProduct) -> AppResult<Product> {
        let product = self.store.create(input);
        tracing::info!(id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    async fn update_product(&self, id: i64, update: UpdateProduct) -> AppResult<Product> {
        self.store.update(id, update)
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.store.delete(id)?;
        tracing::info!(id, "product deleted");
        Ok(())
    }
}
