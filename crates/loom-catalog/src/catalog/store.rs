//! Copy-on-write catalog store.
//!
//! The store is the only writer. Every admin mutation clones the current
//! product list, applies the change, validates the result and publishes it
//! as a new snapshot in one swap. Readers keep whatever `Arc` they already
//! hold and never see a half-applied change.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{CatalogSnapshot, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::{facet_values, Dimension, FacetConfig};

#[derive(Debug)]
struct StoreState {
    snapshot: Arc<CatalogSnapshot>,
    facets: Arc<FacetConfig>,
}

/// Shared holder of the current catalog snapshot and facet master lists.
#[derive(Debug)]
pub struct CatalogStore {
    state: RwLock<StoreState>,
}

impl CatalogStore {
    /// Create a store from an initial snapshot, checking it against the
    /// facet master lists.
    pub fn new(snapshot: CatalogSnapshot, facets: FacetConfig) -> Result<Self, CatalogError> {
        snapshot.check_facets(&facets)?;
        Ok(Self {
            state: RwLock::new(StoreState {
                snapshot: Arc::new(snapshot),
                facets: Arc::new(facets),
            }),
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.read().snapshot)
    }

    /// The current facet master lists.
    pub fn facets(&self) -> Arc<FacetConfig> {
        Arc::clone(&self.read().facets)
    }

    /// Replace the whole collection.
    pub fn replace(&self, products: Vec<Product>) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let mut state = self.write();
        let next = CatalogSnapshot::with_version(state.snapshot.version() + 1, products)?;
        next.check_facets(&state.facets)?;
        Ok(publish(&mut state, next))
    }

    /// Add a new product at the front of the catalog.
    ///
    /// The product gets the next numeric id so `newest` ordering ranks it
    /// first, and starts without the featured or best-seller flags.
    pub fn create(&self, mut product: Product) -> Result<ProductId, CatalogError> {
        let mut state = self.write();

        product.id = next_product_id(&state.snapshot)?;
        product.is_featured = false;
        product.is_best_seller = false;
        state.facets.check_product(&product)?;

        let id = product.id.clone();
        let mut products = Vec::with_capacity(state.snapshot.len() + 1);
        products.push(product);
        products.extend(state.snapshot.iter().cloned());

        let next = CatalogSnapshot::with_version(state.snapshot.version() + 1, products)?;
        publish(&mut state, next);
        Ok(id)
    }

    /// Replace the product with the same id, keeping its position.
    pub fn update(&self, product: Product) -> Result<(), CatalogError> {
        let mut state = self.write();

        let position = state
            .snapshot
            .iter()
            .position(|p| p.id == product.id)
            .ok_or_else(|| CatalogError::ProductNotFound(product.id.to_string()))?;
        state.facets.check_product(&product)?;

        let mut products = state.snapshot.products().to_vec();
        products[position] = product;

        let next = CatalogSnapshot::with_version(state.snapshot.version() + 1, products)?;
        publish(&mut state, next);
        Ok(())
    }

    /// Remove a product, returning the removed record.
    pub fn remove(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let mut state = self.write();

        let mut products = state.snapshot.as_ref().clone().into_products();
        let position = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
        let removed = products.remove(position);

        let next = CatalogSnapshot::with_version(state.snapshot.version() + 1, products)?;
        publish(&mut state, next);
        Ok(removed)
    }

    /// Add a brand to the admin-managed list. Returns `false` if present.
    ///
    /// An unconfigured list is first seeded with the brands the catalog
    /// already carries, so existing products stay valid.
    pub fn add_brand(&self, brand: impl Into<String>) -> bool {
        let mut state = self.write();
        let mut facets = seeded_brands(&state);
        let added = facets.add_brand(brand);
        if added {
            state.facets = Arc::new(facets);
        }
        added
    }

    /// Remove a brand that no product carries any more.
    pub fn remove_brand(&self, brand: &str) -> Result<bool, CatalogError> {
        let mut state = self.write();

        let count = state
            .snapshot
            .iter()
            .filter(|p| p.has_value(Dimension::Brand, brand))
            .count();
        if count > 0 {
            return Err(CatalogError::FacetValueInUse {
                dimension: Dimension::Brand.to_string(),
                value: brand.to_string(),
                count,
            });
        }

        let mut facets = seeded_brands(&state);
        let removed = facets.remove_brand(brand);
        if removed {
            state.facets = Arc::new(facets);
        }
        Ok(removed)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Facet config whose brand list is explicit, taken from the catalog when
/// it was not configured.
fn seeded_brands(state: &StoreState) -> FacetConfig {
    let mut facets = state.facets.as_ref().clone();
    if facets.master_list(Dimension::Brand).is_none() {
        facets.brands = facet_values(&state.snapshot, &facets, Dimension::Brand);
    }
    facets
}

fn publish(state: &mut StoreState, next: CatalogSnapshot) -> Arc<CatalogSnapshot> {
    tracing::info!(
        version = next.version(),
        products = next.len(),
        "catalog snapshot replaced"
    );
    state.snapshot = Arc::new(next);
    Arc::clone(&state.snapshot)
}

fn next_product_id(snapshot: &CatalogSnapshot) -> Result<ProductId, CatalogError> {
    let max = snapshot
        .iter()
        .filter_map(|p| p.id.numeric())
        .max()
        .unwrap_or(0);
    let next = max.checked_add(1).ok_or(CatalogError::IdsExhausted(max))?;
    Ok(ProductId::new(next.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::product;

    fn store() -> CatalogStore {
        let snapshot = CatalogSnapshot::new(vec![
            product("1", "Kanchipuram", 24500, Some(21999)),
            product("2", "Banarasi", 15800, Some(13500)),
        ])
        .unwrap();
        CatalogStore::new(snapshot, FacetConfig::default()).unwrap()
    }

    #[test]
    fn test_create_prepends_with_next_numeric_id() {
        let store = store();
        let mut draft = product("ignored", "Handloom", 3200, None);
        draft.is_featured = true;

        let id = store.create(draft).unwrap();
        assert_eq!(id.as_str(), "3");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.version(), 1);
        assert_eq!(snapshot.products()[0].id, id);
        assert!(!snapshot.products()[0].is_featured);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_readers_keep_old_snapshot() {
        let store = store();
        let before = store.snapshot();
        store.remove(&ProductId::new("1")).unwrap();

        assert_eq!(before.len(), 2);
        assert_eq!(before.version(), 0);
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.snapshot().version(), 1);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = store();
        let mut edited = product("1", "Kanchipuram Bridal", 26000, None);
        edited.stock = 2;
        store.update(edited).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.products()[0].name, "Kanchipuram Bridal");
        assert_eq!(snapshot.products()[1].id.as_str(), "2");
    }

    #[test]
    fn test_update_unknown_product() {
        let store = store();
        let err = store.update(product("99", "Ghost", 10, None)).unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound("99".to_string()));
        assert_eq!(store.snapshot().version(), 0);
    }

    #[test]
    fn test_failed_mutation_publishes_nothing() {
        let store = store();
        let mut bad = product("2", "Banarasi", 15800, None);
        bad.images.clear();
        assert!(store.update(bad).is_err());
        assert_eq!(store.snapshot().version(), 0);
        assert_eq!(store.snapshot().products()[1].images.len(), 1);
    }

    #[test]
    fn test_replace_rejects_duplicates() {
        let store = store();
        let err = store
            .replace(vec![product("7", "A", 1, None), product("7", "B", 2, None)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProduct(_)));
    }

    #[test]
    fn test_brand_management() {
        let facets = FacetConfig {
            brands: vec!["Ramraj".to_string()],
            ..FacetConfig::default()
        };
        let snapshot = CatalogSnapshot::new(vec![product("1", "Dhoti", 1200, None)]).unwrap();
        let store = CatalogStore::new(snapshot, facets).unwrap();

        assert!(store.add_brand("Poombex"));
        assert!(!store.add_brand("Poombex"));
        assert_eq!(store.facets().brands, vec!["Ramraj", "Poombex"]);

        assert!(matches!(
            store.remove_brand("Ramraj"),
            Err(CatalogError::FacetValueInUse { count: 1, .. })
        ));
        assert_eq!(store.remove_brand("Poombex"), Ok(true));
        assert_eq!(store.remove_brand("Poombex"), Ok(false));
    }

    #[test]
    fn test_create_rejects_unknown_brand() {
        let facets = FacetConfig {
            brands: vec!["Ramraj".to_string()],
            ..FacetConfig::default()
        };
        let store = CatalogStore::new(CatalogSnapshot::empty(), facets).unwrap();
        let mut draft = product("", "Saree", 1000, None);
        draft.brand = "Unknown Mills".to_string();
        assert!(matches!(
            store.create(draft),
            Err(CatalogError::UnknownFacetValue { .. })
        ));
    }

    #[test]
    fn test_first_brand_added_keeps_catalog_brands() {
        let mut other = product("2", "Banarasi", 15800, Some(13500));
        other.brand = "Uathayam".to_string();
        let snapshot =
            CatalogSnapshot::new(vec![product("1", "Dhoti", 1200, None), other]).unwrap();
        let store = CatalogStore::new(snapshot, FacetConfig::default()).unwrap();

        assert!(store.add_brand("Kumaran"));
        assert_eq!(store.facets().brands, vec!["Ramraj", "Uathayam", "Kumaran"]);
        assert!(!store.add_brand("Ramraj"));

        let unchanged = store.snapshot().products().to_vec();
        assert!(store.replace(unchanged).is_ok());
    }

    #[test]
    fn test_remove_from_unconfigured_brands() {
        let store = store();
        assert_eq!(store.remove_brand("Poombex"), Ok(false));
        assert!(store.facets().brands.is_empty());
        assert!(matches!(
            store.remove_brand("Ramraj"),
            Err(CatalogError::FacetValueInUse { count: 2, .. })
        ));
    }

    #[test]
    fn test_create_after_largest_id_fails() {
        let snapshot =
            CatalogSnapshot::new(vec![product(&u64::MAX.to_string(), "Dhoti", 1200, None)]).unwrap();
        let store = CatalogStore::new(snapshot, FacetConfig::default()).unwrap();

        let err = store.create(product("", "Saree", 1000, None)).unwrap_err();
        assert_eq!(err, CatalogError::IdsExhausted(u64::MAX));
        assert_eq!(store.snapshot().len(), 1);
    }
}
