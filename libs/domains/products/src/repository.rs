use async_trait::async_trait;

use crate::error::ProductResult;
use crate::filter::ProductFilter;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations own id assignment and must keep ids unique and
/// insertion order stable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product under a freshly assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Products matching the filter, in insertion order
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Merge the present fields of `input` into an existing product
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product>;

    /// Remove a product, returning the removed record
    async fn delete(&self, id: &str) -> ProductResult<Product>;

    /// Total number of stored products
    async fn count(&self) -> ProductResult<usize>;
}
