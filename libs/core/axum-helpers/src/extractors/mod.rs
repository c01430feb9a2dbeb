//! Custom extractors for Axum handlers.
//!
//! Reusable extractors that reduce boilerplate and standardize error
//! handling across the API.

pub mod query;
pub mod validated_json;

pub use query::QueryParams;
pub use validated_json::ValidatedJson;
