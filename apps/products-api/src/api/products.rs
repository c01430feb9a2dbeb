//! Products API routes

use axum::Router;
use domain_products::{handlers, InMemoryProductRepository, ProductService};

use crate::state::AppState;

/// Create products router backed by a freshly seeded catalogue
pub fn router(state: &AppState) -> Router {
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);
    handlers::router(service, state.config.auth.clone())
}
