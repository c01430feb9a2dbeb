//! API routes module

pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::server::{create_router, health_router, RouterOptions};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Listed in the body of every unmatched-route response
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /api/products",
    "GET /api/products/:id",
    "POST /api/products",
    "PUT /api/products/:id",
    "DELETE /api/products/:id",
];

/// Create all API routes (mounted under `/api`)
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Routes served outside `/api`
pub fn top_level(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(health_router(state.config.app))
}

/// Full application router with middleware, docs and fallback
pub fn app(state: &AppState) -> io::Result<Router> {
    let options = RouterOptions::new(
        &state.config.server,
        state.config.environment,
        AVAILABLE_ENDPOINTS,
    );
    create_router::<ApiDoc>(routes(state), top_level(state), &options)
}
