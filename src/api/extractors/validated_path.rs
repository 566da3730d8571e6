//! Path extractor that reports bad parameters through `AppError`.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Path parameters whose rejections use the JSON error body.
///
/// A segment that does not parse as the target type (`/products/abc`) is a
/// 422 validation error. Any integer that parses is handed on unchanged, so
/// an ID the store never issued (including a negative one) ends up as a 404.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(ValidatedPath(value))
    }
}

fn rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(e) => AppError::validation(e.body_text()),
        other => AppError::internal(other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new().route(
            "/items/:id",
            get(|ValidatedPath(id): ValidatedPath<i64>| async move { id.to_string() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_negative_id_passes_through() {
        assert_eq!(call("/items/-1").await, (StatusCode::OK, "-1".to_string()));
    }

    #[tokio::test]
    async fn test_non_integer_is_validation_error() {
        let (status, body) = call("/items/abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_out_of_range_is_validation_error() {
        let (status, _) = call("/items/99999999999999999999").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
