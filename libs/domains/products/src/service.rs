//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::filter::ProductFilter;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::pagination::{Page, Pagination};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer validates input, interprets listing queries and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = ?input.name.present()))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        let product = self.repository.create(input).await?;
        tracing::info!(id = %product.id, "Product created");
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Filter then paginate the catalogue
    #[instrument(skip(self, query))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Page<Product>> {
        let filter = ProductFilter::from_query(&query)?;
        let pagination = Pagination::from_query(query.page.as_deref(), query.limit.as_deref());

        let matching = self.repository.list(filter).await?;
        let page = pagination.paginate(matching);
        tracing::debug!(
            total = page.total,
            count = page.count,
            page = page.page,
            "Listed products"
        );
        Ok(page)
    }

    /// Update a product; only the fields present in `input` change
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        let product = self.repository.update(id, input).await?;
        tracing::info!(id = %product.id, "Product updated");
        Ok(product)
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        let product = self.repository.delete(id).await?;
        tracing::info!(id = %product.id, "Product deleted");
        Ok(product)
    }

    /// Total number of stored products
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::models::seed_products;
    use crate::repository::MockProductRepository;

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .create_product(CreateProduct::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(ref m) if m.len() == 3));
    }

    #[tokio::test]
    async fn test_create_delegates_valid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Product::new("new-id".to_string(), input));

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(CreateProduct {
                name: "Mouse".to_string().into(),
                price: Field::Present(25.0),
                category: "electronics".to_string().into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(product.id, "new-id");
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product("999").await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(id) if id == "999"));
    }

    #[tokio::test]
    async fn test_list_passes_parsed_filter_and_paginates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| filter.category.as_deref() == Some("electronics"))
            .returning(|filter| Ok(filter.apply(&seed_products())));

        let service = ProductService::new(mock_repo);
        let page = service
            .list_products(ProductQuery {
                category: Some("Electronics".to_string()),
                page: Some("2".to_string()),
                limit: Some("1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.count, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].id, "2");
    }

    #[tokio::test]
    async fn test_list_rejects_non_numeric_price_before_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .list_products(ProductQuery {
                max_price: Some("lots".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(
                "1",
                UpdateProduct {
                    name: "  ".to_string().into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(
            matches!(err, ProductError::Validation(ref m) if m == &vec!["Name must be a non-empty string".to_string()])
        );
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .returning(|id| Err(ProductError::NotFound(id.to_string())));

        let service = ProductService::new(mock_repo);
        let err = service.delete_product("42").await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(id) if id == "42"));
    }

    #[tokio::test]
    async fn test_count_products() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().returning(|| Ok(3));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.count_products().await.unwrap(), 3);
    }
}
