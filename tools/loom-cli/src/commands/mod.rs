//! CLI command implementations.

pub mod brands;
pub mod facets;
pub mod products;
pub mod query;
pub mod validate;

use clap::{Args, Subcommand};

/// Arguments for the query command.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Case-insensitive product name search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Select a category (repeatable).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Select a brand (repeatable).
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Select a fabric (repeatable).
    #[arg(long = "fabric", value_name = "FABRIC")]
    pub fabrics: Vec<String>,

    /// Select a color (repeatable).
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Lowest effective price, inclusive.
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Highest effective price, inclusive.
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Minimum rating (0-5).
    #[arg(long)]
    pub rating: Option<f64>,

    /// Only products with stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (relevance, price-low, price-high, newest, popularity, rating).
    #[arg(long)]
    pub sort: Option<String>,

    /// Show at most N products.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Catalog file overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the facets command.
#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Only this dimension (category, brand, fabric, color).
    pub dimension: Option<String>,

    /// Mark these brands as selected.
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Mark these categories as selected.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Catalog file overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the products command.
#[derive(Args, Debug)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,

    /// Catalog file overriding the configured one.
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// Featured products for the home page.
    Featured,
    /// Best sellers.
    BestSellers,
    /// Products running low on stock.
    LowStock {
        /// Warn below this many units.
        #[arg(short, long)]
        threshold: Option<u32>,
    },
    /// Search product names.
    Find {
        /// Search term.
        term: String,
    },
    /// Show one product.
    Show {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (default: the configured one).
    pub catalog: Option<String>,
}

/// Arguments for the brands command.
#[derive(Args, Debug)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: BrandsCommand,

    /// Catalog file overriding the configured one.
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum BrandsCommand {
    /// List brands with product counts.
    List,
    /// Add a brand to the master list.
    Add {
        /// Brand name.
        name: String,
    },
    /// Remove a brand no product uses.
    Remove {
        /// Brand name.
        name: String,
    },
}
