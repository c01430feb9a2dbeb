use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};
use crate::field::Field;

/// A string that is not empty once surrounding whitespace is removed
fn required_text(value: &Field<String>) -> Result<(), ValidationError> {
    match value.present() {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("required_text")),
    }
}

/// A number that is zero or more
fn required_price(value: &Field<f64>) -> Result<(), ValidationError> {
    match value.present() {
        Some(price) if *price >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("required_price")),
    }
}

fn optional_text(value: &Field<String>) -> Result<(), ValidationError> {
    if value.is_missing() {
        return Ok(());
    }
    required_text(value)
}

fn optional_price(value: &Field<f64>) -> Result<(), ValidationError> {
    if value.is_missing() {
        return Ok(());
    }
    required_price(value)
}

/// Absent, or present with the expected type
fn well_typed<T>(value: &Field<T>) -> Result<(), ValidationError> {
    match value {
        Field::Missing | Field::Present(_) => Ok(()),
        Field::Null | Field::Mistyped => Err(ValidationError::new("type")),
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned on create
    pub id: String,
    /// Product name, never blank
    pub name: String,
    /// Free-form description, empty when not provided
    pub description: String,
    /// Non-negative price
    pub price: f64,
    /// Category, never blank
    pub category: String,
    /// Stock availability
    pub in_stock: bool,
}

/// DTO for creating a new product
///
/// Every field is a [`Field`], so a missing, null or wrongly typed value is
/// reported alongside every other violation instead of failing
/// deserialization on its own.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(custom(
        function = "required_text",
        message = "Name is required and must be a non-empty string"
    ))]
    #[schema(value_type = String)]
    pub name: Field<String>,
    #[validate(custom(function = "well_typed", message = "Description must be a string"))]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[validate(custom(
        function = "required_price",
        message = "Price is required and must be a non-negative number"
    ))]
    #[schema(value_type = f64)]
    pub price: Field<f64>,
    #[validate(custom(
        function = "required_text",
        message = "Category is required and must be a non-empty string"
    ))]
    #[schema(value_type = String)]
    pub category: Field<String>,
    /// Defaults to `true`
    #[validate(custom(function = "well_typed", message = "inStock must be a boolean"))]
    #[schema(value_type = Option<bool>)]
    pub in_stock: Field<bool>,
}

/// DTO for updating an existing product
///
/// Absent fields keep their value; a field that is present, including as
/// `null`, must satisfy its constraint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(custom(function = "optional_text", message = "Name must be a non-empty string"))]
    #[schema(value_type = Option<String>)]
    pub name: Field<String>,
    #[validate(custom(function = "well_typed", message = "Description must be a string"))]
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[validate(custom(
        function = "optional_price",
        message = "Price must be a non-negative number"
    ))]
    #[schema(value_type = Option<f64>)]
    pub price: Field<f64>,
    #[validate(custom(
        function = "optional_text",
        message = "Category must be a non-empty string"
    ))]
    #[schema(value_type = Option<String>)]
    pub category: Field<String>,
    #[validate(custom(function = "well_typed", message = "inStock must be a boolean"))]
    #[schema(value_type = Option<bool>)]
    pub in_stock: Field<bool>,
}

/// Raw query parameters for listing products
///
/// Everything is kept as text; [`crate::filter::ProductFilter`] and
/// [`crate::pagination::Pagination`] decide how each value is interpreted.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring of name or description
    pub search: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// `true` for in-stock products, any other value for out-of-stock
    pub in_stock: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> ProductResult<T> {
    value.ok_or_else(|| ProductError::Validation(vec![format!("{} is required", field)]))
}

impl Product {
    /// Build a product from a validated create request.
    ///
    /// Strings are trimmed, a missing description becomes empty and a
    /// missing stock flag becomes `true`.
    pub fn new(id: String, input: CreateProduct) -> ProductResult<Self> {
        Ok(Self {
            id,
            name: required(input.name.into_present(), "name")?
                .trim()
                .to_string(),
            description: input
                .description
                .into_present()
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            price: required(input.price.into_present(), "price")?,
            category: required(input.category.into_present(), "category")?
                .trim()
                .to_string(),
            in_stock: input.in_stock.into_present().unwrap_or(true),
        })
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name.into_present() {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description.into_present() {
            self.description = description.trim().to_string();
        }
        if let Some(price) = update.price.into_present() {
            self.price = price;
        }
        if let Some(category) = update.category.into_present() {
            self.category = category.trim().to_string();
        }
        if let Some(in_stock) = update.in_stock.into_present() {
            self.in_stock = in_stock;
        }
    }
}

/// The catalogue every process starts with
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
