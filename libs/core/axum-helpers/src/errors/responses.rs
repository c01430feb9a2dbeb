//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 5000,
        "error": "Internal Server Error",
        "message": "Something went wrong on the server"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "Validation failed",
        "message": "Request validation failed",
        "details": [
            "Name is required and must be a non-empty string",
            "Price is required and must be a non-negative number"
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "Not found",
        "message": "No product found with id: 42"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - API key missing",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "Authentication required",
        "message": "Please provide an API key in x-api-key header"
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - API key rejected",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "Invalid API key",
        "message": "The provided API key is not valid"
    })
)]
pub struct ForbiddenResponse(pub ErrorResponse);
