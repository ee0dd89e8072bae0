//! Snapshot ingestion from the admin collaborator's JSON format.
//!
//! Malformed records fail here, before any filtering or sorting sees them.

use std::collections::HashSet;

use crate::catalog::{CatalogSnapshot, Product};
use crate::error::CatalogError;
use crate::search::FacetConfig;

/// Parse a JSON array of products without validating them.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate a snapshot, failing on the first violation.
pub fn load_snapshot(json: &str, config: &FacetConfig) -> Result<CatalogSnapshot, CatalogError> {
    let products = parse_products(json)?;
    let count = products.len();
    let snapshot = CatalogSnapshot::checked(products, config).map_err(|e| {
        tracing::warn!(error = %e, "catalog snapshot rejected");
        e
    })?;
    tracing::debug!(products = count, "catalog snapshot loaded");
    Ok(snapshot)
}

/// Every violation in a product list, for diagnostics.
pub fn audit(products: &[Product], config: &FacetConfig) -> Vec<CatalogError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for product in products {
        if let Err(e) = product.validate() {
            problems.push(e);
        }
        if let Err(e) = config.check_product(product) {
            problems.push(e);
        }
        if !seen.insert(&product.id) {
            problems.push(CatalogError::DuplicateProduct(product.id.to_string()));
        }
    }

    problems
}

/// Serialize a snapshot back to the JSON format.
pub fn to_json(snapshot: &CatalogSnapshot) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(snapshot.products())?)
}
