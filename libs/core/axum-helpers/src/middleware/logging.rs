use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use super::api_key::API_KEY_HEADER;

/// Request logging middleware
///
/// Emits one line when a request arrives (method, path, query string and
/// whether an API key was supplied; never the key itself) and one when the
/// response leaves (status and latency).
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let api_key_present = request.headers().contains_key(API_KEY_HEADER);
    let start = Instant::now();

    tracing::info!(
        %method,
        %path,
        query = %query,
        api_key_present,
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
