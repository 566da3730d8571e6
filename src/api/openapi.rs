//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{product_handler, user_handler};
use crate::domain::{CreateProduct, CreateUser, Product, UpdateProduct, UpdateUser, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Product & User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product & User CRUD API",
        version = "1.0.0",
        description = "A simple CRUD API for managing products and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // Product endpoints
        product_handler::list_products,
        product_handler::get_product,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            UserResponse,
            CreateUser,
            UpdateUser,
            MessageResponse,
        )
    ),
    tags(
        (name = "Products", description = "Product catalogue operations"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in ["/products", "/products/{id}", "/users", "/users/{id}"] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_user_schema_has_no_password() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        let props = &doc["components"]["schemas"]["UserResponse"]["properties"];

        assert!(props.get("email").is_some());
        assert!(props.get("password").is_none());
    }
}
