//! HTTP middleware.
//!
//! - [`api_key`]: shared-secret `x-api-key` gate for mutating routes
//! - [`logging`]: per-request structured log lines
//! - [`cors`]: CORS layer built from configured origins
//! - [`security`]: defensive response headers

pub mod api_key;
pub mod cors;
pub mod logging;
pub mod security;

pub use api_key::{API_KEY_HEADER, require_api_key};
pub use cors::create_cors_layer;
pub use logging::request_logger;
pub use security::security_headers;
