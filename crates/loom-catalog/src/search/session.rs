//! Browsing session state owned by the presentation layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::error::CatalogError;
use crate::search::{
    project_chips, query, Chip, FilterCommand, FilterState, MemoizedQuery, QueryResult, SortOption,
};

/// Filters, sort and search term for one browsing context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseSession {
    filters: FilterState,
    sort: SortOption,
    search: String,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session opened from a category landing link.
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            filters: FilterState::for_category(category),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Apply a filter command. `ClearAll` also clears the search term.
    pub fn apply(&mut self, command: FilterCommand) -> Result<(), CatalogError> {
        let clears_search = command == FilterCommand::ClearAll;
        self.filters.apply(command)?;
        if clears_search {
            self.search.clear();
        }
        Ok(())
    }

    /// Remove the filter a chip stands for.
    pub fn remove_chip(&mut self, chip: &Chip) -> Result<(), CatalogError> {
        self.filters.apply(chip.removal())
    }

    /// Reset filters and search term together. The sort choice is kept.
    pub fn clear_all(&mut self) {
        self.filters = FilterState::default();
        self.search.clear();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn chips(&self) -> Vec<Chip> {
        project_chips(&self.filters)
    }

    /// Run the session's query against a snapshot.
    pub fn run(&self, catalog: &CatalogSnapshot) -> QueryResult {
        query(catalog, &self.filters, self.sort, &self.search)
    }

    /// Run through a memo, reusing the previous result when nothing changed.
    pub fn run_memoized(
        &self,
        memo: &mut MemoizedQuery,
        catalog: &Arc<CatalogSnapshot>,
    ) -> Arc<QueryResult> {
        memo.query(catalog, &self.filters, self.sort, &self.search)
    }
}
