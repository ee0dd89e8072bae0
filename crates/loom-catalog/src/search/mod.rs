//! Faceted catalog search.
//!
//! Predicate matching, sorting, facet enumeration, chip projection and the
//! query orchestrator that composes them.

mod chips;
mod facets;
mod filter;
mod predicate;
mod query;
mod sequence;
mod session;
mod sort;

pub use chips::{project_chips, Chip, ChipKey};
pub use facets::{
    facet_options, facet_values, facets, price_bounds, Dimension, Facet, FacetConfig, FacetOption,
};
pub use filter::{Availability, FilterCommand, FilterState, PriceRange, RatingThreshold};
pub use predicate::{matches, matches_search, Predicate};
pub use query::{query, MemoizedQuery, QueryKey, QueryResult};
pub use sequence::{QuerySequencer, QueryTicket};
pub use session::BrowseSession;
pub use sort::{sort_products, SortOption};
