//! Catalog error types.

use thiserror::Error;

/// Errors raised at the edges of the catalog core: ingestion, admin
/// mutations and filter mutators. Querying itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Price range with min above max.
    #[error("Invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: u64, max: u64 },

    /// Rating threshold outside 0.0..=5.0 or not a number.
    #[error("Invalid rating threshold: {0}")]
    InvalidRating(f64),

    /// Product record violating the snapshot contract.
    #[error("Malformed product {id}: {reason}")]
    MalformedProduct { id: String, reason: String },

    /// Two products in one snapshot share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Facet value outside the configured master list.
    #[error("Unknown {dimension} value: {value}")]
    UnknownFacetValue { dimension: String, value: String },

    /// Facet value still carried by products.
    #[error("{dimension} value {value} is used by {count} product(s)")]
    FacetValueInUse {
        dimension: String,
        value: String,
        count: usize,
    },

    /// No numeric id is left above the highest one in use.
    #[error("No product id available after {0}")]
    IdsExhausted(u64),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CatalogError {
    pub(crate) fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::MalformedProduct {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
