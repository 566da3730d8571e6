//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::{present, Entity};
use crate::config::ENTITY_PRODUCT;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = "High-performance laptop for work and gaming")]
    pub description: String,
    /// Unit price, never negative
    #[schema(example = 999.99)]
    pub price: f64,
    #[schema(example = "Electronics")]
    pub category: String,
    #[schema(example = json!(["computer", "portable"]))]
    pub tags: Vec<String>,
    pub in_stock: bool,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

fn default_in_stock() -> bool {
    true
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Test Product")]
    pub name: String,
    #[schema(example = "A test product description")]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[schema(example = 29.99, minimum = 0.0)]
    pub price: f64,
    #[schema(example = "Test Category")]
    pub category: String,
    #[serde(default)]
    #[schema(example = json!(["test", "product"]))]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    #[schema(default = true)]
    pub in_stock: bool,
}

/// Product update data transfer object
///
/// Every field is optional; only the fields present in the request are
/// written. An explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "present")]
    #[schema(example = "Updated Product")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    #[schema(example = 39.99, minimum = 0.0)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(example = false)]
    pub in_stock: Option<bool>,
}

impl Entity for Product {
    const KIND: &'static str = ENTITY_PRODUCT;

    type Create = CreateProduct;
    type Update = UpdateProduct;

    fn from_create(id: i64, created_at: DateTime<Utc>, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            tags: input.tags,
            in_stock: input.in_stock,
            created_at,
        }
    }

    fn apply(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::from_create(
            5,
            Utc::now(),
            CreateProduct {
                name: "Test Product".to_string(),
                description: "A test product description".to_string(),
                price: 29.99,
                category: "Test Category".to_string(),
                tags: vec!["test".to_string(), "product".to_string()],
                in_stock: true,
            },
        )
    }

    #[test]
    fn test_create_defaults() {
        let input: CreateProduct = serde_json::from_str(
            r#"{"name":"Mug","description":"Ceramic","price":4.5,"category":"Kitchen"}"#,
        )
        .unwrap();

        assert!(input.tags.is_empty());
        assert!(input.in_stock);
    }

    #[test]
    fn test_create_missing_fields_rejected() {
        let result = serde_json::from_str::<CreateProduct>(r#"{"name":"Test Product"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let input: CreateProduct = serde_json::from_str(
            r#"{"name":"Mug","description":"Ceramic","price":-1.0,"category":"Kitchen"}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());

        let update = UpdateProduct {
            price: Some(-0.01),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut product = sample();
        let before = product.clone();

        product.apply(UpdateProduct {
            name: Some("Updated Product".to_string()),
            price: Some(39.99),
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(product.name, "Updated Product");
        assert_eq!(product.price, 39.99);
        assert!(!product.in_stock);
        assert_eq!(product.description, before.description);
        assert_eq!(product.category, before.category);
        assert_eq!(product.tags, before.tags);
        assert_eq!(product.id, before.id);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn test_update_absent_vs_null() {
        let update: UpdateProduct = serde_json::from_str(r#"{"name":"Only Name"}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("Only Name"));
        assert!(update.price.is_none());
        assert!(update.tags.is_none());

        let result = serde_json::from_str::<UpdateProduct>(r#"{"price":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_tags_replace_existing() {
        let mut product = sample();
        product.apply(UpdateProduct {
            tags: Some(vec![]),
            ..Default::default()
        });
        assert!(product.tags.is_empty());
    }
}
