//! Service index

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub authentication: &'static str,
    pub documentation: &'static str,
}

async fn welcome() -> Json<WelcomeResponse> {
    let endpoints = BTreeMap::from([
        (
            "GET /api/products",
            "Get all products (supports filtering, pagination, search)",
        ),
        ("GET /api/products/:id", "Get a specific product"),
        (
            "POST /api/products",
            "Create a new product (requires authentication)",
        ),
        (
            "PUT /api/products/:id",
            "Update a product (requires authentication)",
        ),
        (
            "DELETE /api/products/:id",
            "Delete a product (requires authentication)",
        ),
    ]);

    Json(WelcomeResponse {
        message: "Welcome to the Product API!",
        endpoints,
        authentication: "Include x-api-key header for POST, PUT, DELETE operations",
        documentation: "Interactive documentation at /swagger-ui",
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}
