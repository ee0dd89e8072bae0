//! The query orchestrator.
//!
//! `query` is referentially transparent: filter the snapshot in catalog
//! order, sort the survivors, and project chips from the filters alone.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{CatalogSnapshot, Product};
use crate::search::predicate::normalize_search;
use crate::search::{project_chips, sort_products, Chip, FilterState, Predicate, SortOption};

/// The visible, ordered listing and its derived UI state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub items: Vec<Product>,
    pub count: usize,
    pub chips: Vec<Chip>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Run one query against a snapshot.
pub fn query(
    catalog: &CatalogSnapshot,
    filters: &FilterState,
    sort: SortOption,
    search: &str,
) -> QueryResult {
    let predicate = Predicate::new(filters, search);
    let mut matched: Vec<&Product> = catalog.iter().filter(|p| predicate.matches(p)).collect();
    sort_products(&mut matched, sort);

    let items: Vec<Product> = matched.into_iter().cloned().collect();
    tracing::debug!(
        catalog_version = catalog.version(),
        catalog_size = catalog.len(),
        %sort,
        results = items.len(),
        "catalog query"
    );

    QueryResult {
        count: items.len(),
        chips: project_chips(filters),
        items,
    }
}

/// Everything a query result depends on besides the snapshot contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub catalog_version: u64,
    pub filters: FilterState,
    pub sort: SortOption,
    /// Search term after trimming and lowercasing.
    pub search: String,
}

impl QueryKey {
    pub fn new(
        catalog: &CatalogSnapshot,
        filters: &FilterState,
        sort: SortOption,
        search: &str,
    ) -> Self {
        Self {
            catalog_version: catalog.version(),
            filters: filters.clone(),
            sort,
            search: normalize_search(search),
        }
    }
}

#[derive(Debug)]
struct MemoEntry {
    catalog: Arc<CatalogSnapshot>,
    key: QueryKey,
    result: Arc<QueryResult>,
}

/// Single-slot memo over [`query`].
///
/// The last result is reused while the snapshot, filters, sort and search
/// term are unchanged. The held snapshot is compared by identity as well as
/// version, so two unrelated snapshots that share a version never collide.
#[derive(Debug, Default)]
pub struct MemoizedQuery {
    last: Option<MemoEntry>,
    hits: u64,
    misses: u64,
}

impl MemoizedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(
        &mut self,
        catalog: &Arc<CatalogSnapshot>,
        filters: &FilterState,
        sort: SortOption,
        search: &str,
    ) -> Arc<QueryResult> {
        let key = QueryKey::new(catalog, filters, sort, search);

        if let Some(entry) = &self.last {
            if Arc::ptr_eq(&entry.catalog, catalog) && entry.key == key {
                self.hits += 1;
                return Arc::clone(&entry.result);
            }
        }

        self.misses += 1;
        let result = Arc::new(query(catalog, filters, sort, search));
        self.last = Some(MemoEntry {
            catalog: Arc::clone(catalog),
            key,
            result: Arc::clone(&result),
        });
        result
    }

    /// Drop the cached result.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
