//! Listing predicates.
//!
//! Criteria are applied in a fixed order (search, category, stock, min
//! price, max price) and compose by intersection. Only criteria present in
//! the query take part; with none present the input comes back unchanged.

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductQuery};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Lowercased search text
    pub search: Option<String>,
    /// Lowercased category
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Empty strings count as absent
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_price(name: &str, raw: Option<&String>) -> ProductResult<Option<f64>> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ProductError::Validation(vec![format!(
            "{} must be a number",
            name
        )])),
    }
}

impl ProductFilter {
    /// Interpret raw listing query parameters.
    ///
    /// `inStock` is `true` only for the literal `"true"`; any other value,
    /// including an empty one, selects out-of-stock products. A present but
    /// non-numeric `minPrice` or `maxPrice` is a validation error.
    pub fn from_query(query: &ProductQuery) -> ProductResult<Self> {
        Ok(Self {
            search: non_empty(query.search.as_ref()).map(str::to_lowercase),
            category: non_empty(query.category.as_ref()).map(str::to_lowercase),
            in_stock: query.in_stock.as_deref().map(|v| v == "true"),
            min_price: parse_price("minPrice", query.min_price.as_ref())?,
            max_price: parse_price("maxPrice", query.max_price.as_ref())?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            if !product.name.to_lowercase().contains(search)
                && !product.description.to_lowercase().contains(search)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }

    /// Matching products in their original relative order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
