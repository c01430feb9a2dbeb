//! Query string extractor that reports failures through [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Like [`Query`], but a query string that cannot be deserialized (a
/// repeated single-valued key, for example) becomes
/// `400 Validation failed` with the standard JSON error body.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Params {
        category: Option<String>,
    }

    async fn handler(QueryParams(params): QueryParams<Params>) -> String {
        params.category.unwrap_or_default()
    }

    fn app() -> Router {
        Router::new().route("/", get(handler))
    }

    fn get_request(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_query_is_deserialized() {
        let response = app().oneshot(get_request("/?category=kitchen")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"kitchen");
    }

    #[tokio::test]
    async fn test_repeated_key_is_json_validation_error() {
        let response = app()
            .oneshot(get_request("/?category=a&category=b"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 1001);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"].as_array().map(Vec::len), Some(1));
    }
}
