//! Loom CLI - Command line harness for the Loom catalog query engine.
//!
//! Commands:
//! - `loom query` - Filter, search and sort the catalog
//! - `loom facets` - List facet options with counts
//! - `loom products` - Home page rails, stock warnings and lookups
//! - `loom validate` - Check a catalog snapshot for ingestion errors
//! - `loom brands` - Manage the brand master list

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrandsArgs, FacetsArgs, ProductsArgs, QueryArgs, ValidateArgs};

/// Loom CLI - Browse and validate a storefront catalog
#[derive(Parser)]
#[command(name = "loom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a catalog query
    Query(QueryArgs),

    /// List facet options
    Facets(FacetsArgs),

    /// Show product views
    Products(ProductsArgs),

    /// Validate a catalog snapshot
    Validate(ValidateArgs),

    /// Manage the brand master list
    Brands(BrandsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Query(args) => commands::query::run(args, &ctx),
        Commands::Facets(args) => commands::facets::run(args, &ctx),
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Brands(args) => commands::brands::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
