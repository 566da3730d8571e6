//! HTTP request handlers.

pub mod product_handler;
pub mod user_handler;

pub use product_handler::product_routes;
pub use user_handler::user_routes;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use crate::api::{create_router, AppState};
    use crate::domain::User;
    use crate::errors::AppError;
    use crate::services::{
        MockProductService, MockServiceContainer, MockUserService, ProductService, UserService,
    };

    fn state_with(products: MockProductService, users: MockUserService) -> AppState {
        let products: Arc<dyn ProductService> = Arc::new(products);
        let users: Arc<dyn UserService> = Arc::new(users);

        let mut container = MockServiceContainer::new();
        container
            .expect_products()
            .returning(move || products.clone());
        container.expect_users().returning(move || users.clone());

        AppState::from_container(&container)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404_with_entity_message() {
        let mut products = MockProductService::new();
        products
            .expect_get_product()
            .with(eq(42))
            .returning(|id| Err(AppError::not_found("Product", id)));

        let app = create_router(state_with(products, MockUserService::new()));
        let response = app
            .oneshot(Request::get("/products/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_user_handler_projects_service_result() {
        let mut users = MockUserService::new();
        users.expect_get_user().with(eq(9)).returning(|id| {
            Ok(User {
                id,
                name: "Mock User".to_string(),
                email: "mock@example.com".to_string(),
                password: "hunter22".to_string(),
                created_at: Utc::now(),
            })
        });

        let app = create_router(state_with(MockProductService::new(), users));
        let response = app
            .oneshot(Request::get("/users/9").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 9);
        assert_eq!(body["name"], "Mock User");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_service() {
        // No expectations: any service call would panic the mock.
        let app = create_router(state_with(
            MockProductService::new(),
            MockUserService::new(),
        ));

        let response = app
            .oneshot(
                Request::post("/products")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Test Product"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_user_confirms() {
        let mut users = MockUserService::new();
        users
            .expect_delete_user()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(()));

        let app = create_router(state_with(MockProductService::new(), users));
        let response = app
            .oneshot(Request::delete("/users/3").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User deleted successfully");
    }
}
