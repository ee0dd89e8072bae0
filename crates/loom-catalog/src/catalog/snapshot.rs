//! Immutable, versioned catalog snapshots.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::{matches_search, FacetConfig};

/// Stock level below which the admin table flags a product.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A point-in-time copy of the full product collection.
///
/// Snapshots are never mutated; admin changes produce a new snapshot with a
/// higher version through [`crate::catalog::CatalogStore`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSnapshot {
    version: u64,
    products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Build a version-0 snapshot, checking every record and id uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        Self::with_version(0, products)
    }

    /// Build a snapshot that also checks category, brand and fabric against
    /// the configured master lists.
    pub fn checked(products: Vec<Product>, config: &FacetConfig) -> Result<Self, CatalogError> {
        let snapshot = Self::new(products)?;
        snapshot.check_facets(config)?;
        Ok(snapshot)
    }

    /// An empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_version(version: u64, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self { version, products })
    }

    pub(crate) fn check_facets(&self, config: &FacetConfig) -> Result<(), CatalogError> {
        self.products.iter().try_for_each(|p| config.check_product(p))
    }

    /// Monotonic version, bumped on every replacement.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products for the home page rail.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// Products carrying the best-seller badge.
    pub fn best_sellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_best_seller).collect()
    }

    /// Products whose stock is below `threshold`.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect()
    }

    /// Name search used by the admin product table.
    pub fn search_by_name(&self, term: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| matches_search(p, term))
            .collect()
    }

    pub(crate) fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::product;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = CatalogSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.version(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CatalogSnapshot::new(vec![
            product("1", "A", 100, None),
            product("1", "B", 200, None),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProduct("1".to_string()));
    }

    #[test]
    fn test_malformed_product_rejected() {
        let mut bad = product("2", "B", 200, None);
        bad.images.clear();
        let err = CatalogSnapshot::new(vec![product("1", "A", 100, None), bad]).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedProduct { ref id, .. } if id == "2"));
    }

    #[test]
    fn test_views() {
        let mut a = product("1", "Kanchipuram Silk", 100, None);
        a.is_featured = true;
        a.stock = 3;
        let mut b = product("2", "Cotton Dhoti", 200, None);
        b.is_best_seller = true;
        b.stock = 150;
        let snapshot = CatalogSnapshot::new(vec![a, b]).unwrap();

        assert_eq!(snapshot.featured().len(), 1);
        assert_eq!(snapshot.best_sellers()[0].id.as_str(), "2");
        assert_eq!(snapshot.low_stock(LOW_STOCK_THRESHOLD)[0].id.as_str(), "1");
        assert_eq!(snapshot.search_by_name("DHOTI").len(), 1);
        assert!(snapshot.get(&ProductId::new("2")).is_some());
        assert!(snapshot.get(&ProductId::new("3")).is_none());
    }

    #[test]
    fn test_checked_rejects_unknown_category() {
        let config = FacetConfig {
            categories: vec!["Fancy Sarees".to_string()],
            ..FacetConfig::default()
        };
        let err = CatalogSnapshot::checked(vec![product("1", "A", 100, None)], &config).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownFacetValue { .. }));
    }
}
