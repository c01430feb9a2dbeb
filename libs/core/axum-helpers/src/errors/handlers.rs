use std::any::Any;

use axum::{
    Json,
    body::Body,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower_http::catch_panic::ResponseForPanic;

use super::{ErrorCode, ErrorResponse};

/// Body returned when no route matches.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundResponse {
    pub error: &'static str,
    pub message: String,
    pub available_endpoints: &'static [&'static str],
}

/// Fallback for unmatched routes.
///
/// Echoes the method and path and lists the endpoints the service does
/// expose. Wire it with a closure so the endpoint list can be captured:
///
/// ```ignore
/// router.fallback(move |method, uri| async move { not_found(method, uri, ENDPOINTS) })
/// ```
pub fn not_found(method: Method, uri: Uri, endpoints: &'static [&'static str]) -> Response {
    tracing::debug!(
        error_code = ErrorCode::RouteNotFound.code(),
        %method,
        %uri,
        "No route matched"
    );

    let body = Json(RouteNotFoundResponse {
        error: ErrorCode::RouteNotFound.title(),
        message: format!("Cannot {} {}", method, uri.path()),
        available_endpoints: endpoints,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Turns handler panics into 500 JSON responses.
///
/// The panic payload is always logged; it is only echoed in `details`
/// when `expose_details` is set (development).
#[derive(Clone, Copy, Debug)]
pub struct PanicResponder {
    expose_details: bool,
}

impl PanicResponder {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let code = ErrorCode::HandlerPanic;
        let detail = panic_message(err.as_ref());
        tracing::error!(error_code = code.code(), panic = %detail, "Handler panicked");

        let mut body = ErrorResponse::new(code, code.default_message());
        if self.expose_details {
            body = body.with_details(serde_json::json!(detail));
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    const ENDPOINTS: &[&str] = &["GET /", "GET /api/products"];

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints() {
        let response = not_found(Method::PATCH, Uri::from_static("/nope?x=1"), ENDPOINTS);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "Cannot PATCH /nope");
        assert_eq!(
            body["availableEndpoints"],
            serde_json::json!(["GET /", "GET /api/products"])
        );
    }

    #[tokio::test]
    async fn test_panic_details_only_when_exposed() {
        let mut dev = PanicResponder::new(true);
        let body = body_json(dev.response_for_panic(Box::new("boom"))).await;
        assert_eq!(body["details"], "boom");

        let mut prod = PanicResponder::new(false);
        let response = prod.response_for_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body.get("details").is_none());
        assert_eq!(body["message"], "Something went wrong on the server");
    }
}
