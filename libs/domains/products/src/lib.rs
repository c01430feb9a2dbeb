//! Products Domain
//!
//! In-memory product catalogue with filtered, paginated listing and
//! API-key protected mutations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, filter + pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Store     │  ← Ordered collection
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::auth::ApiKeyConfig;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service, ApiKeyConfig::default());
//! ```

pub mod error;
pub mod field;
pub mod filter;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use field::Field;
pub use filter::ProductFilter;
pub use handlers::{ApiDoc, ApiKeySecurity};
pub use memory::InMemoryProductRepository;
pub use models::{seed_products, CreateProduct, Product, ProductQuery, UpdateProduct};
pub use pagination::{Page, Pagination};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::ProductStore;
