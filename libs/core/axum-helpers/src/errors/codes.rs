//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - A short title used as the `error` field of response bodies
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.title(), "Validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Requested resource was not found
    NotFound,

    /// Authentication credentials are missing
    Unauthorized,

    /// Authentication credentials are present but not accepted
    Forbidden,

    /// Request body could not be parsed as the expected JSON
    InvalidJson,

    /// No route matches the request
    RouteNotFound,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A handler panicked while processing the request
    HandlerPanic,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidJson => "INVALID_JSON",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::HandlerPanic => "HANDLER_PANIC",
        }
    }

    /// Integer code for structured logs and metrics.
    ///
    /// - 1000-1999: Client errors
    /// - 5000-5999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::Unauthorized => 1006,
            Self::Forbidden => 1007,
            Self::InvalidJson => 1010,
            Self::RouteNotFound => 1012,
            Self::InternalError => 5000,
            Self::HandlerPanic => 5001,
        }
    }

    /// Short human-readable title, returned as the `error` field.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::NotFound => "Not found",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Invalid API key",
            Self::InvalidJson => "Invalid JSON body",
            Self::RouteNotFound => "Not found",
            Self::InternalError | Self::HandlerPanic => "Internal Server Error",
        }
    }

    /// Default message when the caller has nothing more specific.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Please provide an API key in x-api-key header",
            Self::Forbidden => "The provided API key is not valid",
            Self::InvalidJson => "Failed to parse request body",
            Self::RouteNotFound => "No route matches the request",
            Self::InternalError | Self::HandlerPanic => "Something went wrong on the server",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
