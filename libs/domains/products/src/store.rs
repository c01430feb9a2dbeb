//! Ordered in-memory product collection.
//!
//! Insertion order is preserved and is the order every listing reports.
//! The store holds no lock of its own; callers serialize access.

use crate::models::{seed_products, Product};

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the seed catalogue
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Append at the end, preserving insertion order
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_index_by_id(id).is_some()
    }

    /// Overwrite the record at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the store untouched when `index` is out of
    /// bounds.
    pub fn replace_at(&mut self, index: usize, product: Product) -> Option<Product> {
        self.products
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, product))
    }

    /// Remove the record at `index`; later records shift down by one
    pub fn remove_at(&mut self, index: usize) -> Option<Product> {
        (index < self.products.len()).then(|| self.products.remove(index))
    }

    /// Current contents in insertion order
    pub fn snapshot(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
