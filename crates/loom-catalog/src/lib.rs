//! Faceted catalog query engine for the Loom storefront.
//!
//! This crate turns a fixed product snapshot, a filter selection, a search
//! term and a sort choice into the visible, ordered listing plus its derived
//! UI state:
//!
//! - **Catalog**: products, immutable versioned snapshots, the
//!   copy-on-write store and JSON ingestion
//! - **Search**: predicate, sort, facet enumeration, active-filter chips and
//!   the query orchestrator
//!
//! # Example
//!
//! ```rust,ignore
//! use loom_catalog::prelude::*;
//!
//! let snapshot = ingest::load_snapshot(&json, &FacetConfig::default())?;
//!
//! let mut session = BrowseSession::new();
//! session.apply(FilterCommand::toggle(Dimension::Brand, "Ramraj"))?;
//! session.set_sort(SortOption::PriceLow);
//!
//! let result = session.run(&snapshot);
//! println!("{} products", result.count);
//! for chip in &result.chips {
//!     println!("[{}] x", chip.label);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        ingest, CatalogSnapshot, CatalogStore, Product, ProductSummary, LOW_STOCK_THRESHOLD,
    };

    // Search
    pub use crate::search::{
        facet_options, facet_values, facets, matches, price_bounds, project_chips, query,
        sort_products, Availability, BrowseSession, Chip, ChipKey, Dimension, Facet, FacetConfig,
        FacetOption, FilterCommand, FilterState, MemoizedQuery, PriceRange, QueryResult,
        QuerySequencer, QueryTicket, RatingThreshold, SortOption,
    };
}
