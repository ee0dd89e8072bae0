//! Product catalog module.
//!
//! Contains the product record, immutable snapshots, the copy-on-write
//! store and snapshot ingestion.

pub mod ingest;
pub(crate) mod product;
mod snapshot;
mod store;

pub use product::{Product, ProductSummary, MAX_RATING};
pub use snapshot::{CatalogSnapshot, LOW_STOCK_THRESHOLD};
pub use store::CatalogStore;
