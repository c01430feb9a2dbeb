use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use core_config::auth::ApiKeyConfig;
use subtle::ConstantTimeEq;

use crate::errors::{AppError, ErrorCode};

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// API key authentication middleware
///
/// Rejects with 401 when `x-api-key` is absent and 403 when it does not
/// match the configured secret. The comparison is constant-time. Runs
/// before any extractor of the wrapped handler, so a rejected request
/// never reaches body validation.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, middleware, routing::post};
/// use axum_helpers::middleware::require_api_key;
///
/// let protected = Router::new()
///     .route("/", post(create))
///     .route_layer(middleware::from_fn_with_state(api_key_config, require_api_key));
/// ```
pub async fn require_api_key(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(provided) = request.headers().get(API_KEY_HEADER) else {
        tracing::debug!("No API key supplied");
        return Err(AppError::Unauthorized(
            ErrorCode::Unauthorized.default_message().to_string(),
        ));
    };

    let accepted: bool = provided
        .as_bytes()
        .ct_eq(config.api_key().as_bytes())
        .into();

    if !accepted {
        tracing::debug!("API key rejected");
        return Err(AppError::Forbidden(
            ErrorCode::Forbidden.default_message().to_string(),
        ));
    }

    Ok(next.run(request).await)
}
