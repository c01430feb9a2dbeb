//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::filter::ProductFilter;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::store::ProductStore;

/// Process-local product repository.
///
/// Mutations take the write lock for their whole find-then-mutate sequence,
/// so concurrent requests never observe a half-applied change. Contents are
/// lost on restart.
pub struct InMemoryProductRepository {
    store: RwLock<ProductStore>,
}

impl InMemoryProductRepository {
    /// Repository preloaded with the seed catalogue
    pub fn new() -> Self {
        Self::with_store(ProductStore::seeded())
    }

    /// Repository with no products
    pub fn empty() -> Self {
        Self::with_store(ProductStore::new())
    }

    pub fn with_store(store: ProductStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_id(store: &ProductStore) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !store.contains_id(&id) {
            return id;
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = Product::new(fresh_id(&store), input)?;
        store.append(product.clone());
        tracing::debug!(id = %product.id, total = store.len(), "Product stored");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self.store.read().await.find_by_id(id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(filter.apply(store.snapshot()))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let index = store
            .find_index_by_id(id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let mut product = store.snapshot()[index].clone();
        product.apply_update(input);
        store
            .replace_at(index, product.clone())
            .ok_or_else(|| ProductError::Internal(format!("index {} vanished", index)))?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let index = store
            .find_index_by_id(id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        store
            .remove_at(index)
            .ok_or_else(|| ProductError::Internal(format!("index {} vanished", index)))
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.store.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use std::sync::Arc;

    fn mouse() -> CreateProduct {
        CreateProduct {
            name: "Mouse".to_string().into(),
            price: Field::Present(25.0),
            category: "electronics".to_string().into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_appends_with_unique_id() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(mouse()).await.unwrap();

        assert!(!created.id.is_empty());
        assert!(created.in_stock);
        assert_eq!(created.description, "");
        assert_eq!(repo.count().await.unwrap(), 4);

        let all = repo.list(ProductFilter::default()).await.unwrap();
        assert_eq!(all.last().map(|p| p.id.as_str()), Some(created.id.as_str()));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(
            repo.get_by_id("1").await.unwrap().map(|p| p.name),
            Some("Laptop".to_string())
        );
        assert!(repo.get_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_in_place() {
        let repo = InMemoryProductRepository::new();
        let updated = repo
            .update(
                "2",
                UpdateProduct {
                    price: Field::Present(750.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 750.0);
        assert_eq!(updated.name, "Smartphone");

        let ids: Vec<_> = repo
            .list(ProductFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let err = repo.update("999", UpdateProduct::default()).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(id) if id == "999"));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = InMemoryProductRepository::new();
        let removed = repo.delete("1").await.unwrap();
        assert_eq!(removed.name, "Laptop");
        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.get_by_id("1").await.unwrap().is_none());

        assert!(matches!(
            repo.delete("1").await.unwrap_err(),
            ProductError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_store_untouched() {
        let repo = InMemoryProductRepository::new();
        assert!(matches!(
            repo.delete("999").await.unwrap_err(),
            ProductError::NotFound(_)
        ));
        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(
            repo.list(ProductFilter::default()).await.unwrap(),
            crate::models::seed_products()
        );
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryProductRepository::empty();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.list(ProductFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_ids_unique() {
        let repo = Arc::new(InMemoryProductRepository::empty());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(mouse()).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(repo.count().await.unwrap(), 32);
    }
}
