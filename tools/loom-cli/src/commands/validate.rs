//! Catalog validation command.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use loom_catalog::catalog::{ingest, LOW_STOCK_THRESHOLD};

use super::ValidateArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ValidationReport {
    path: String,
    products: usize,
    low_stock: usize,
    problems: Vec<String>,
}

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let path = ctx.catalog_path(args.catalog.as_deref());
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let products = ingest::parse_products(&json)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
    let problems: Vec<String> = ingest::audit(&products, &ctx.config.facets)
        .iter()
        .map(ToString::to_string)
        .collect();

    let report = ValidationReport {
        path: path.display().to_string(),
        products: products.len(),
        low_stock: products
            .iter()
            .filter(|p| p.is_low_stock(LOW_STOCK_THRESHOLD))
            .count(),
        problems,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.header("Catalog Validation");
        ctx.output.kv("path", &report.path);
        ctx.output.kv("products", &report.products.to_string());

        if report.low_stock > 0 {
            ctx.output.warn(&format!(
                "{} products below {} units",
                report.low_stock, LOW_STOCK_THRESHOLD
            ));
        }

        if report.problems.is_empty() {
            ctx.output.success("Catalog is valid");
        } else {
            for problem in &report.problems {
                ctx.output.list_item(problem);
            }
        }
    }

    if !report.problems.is_empty() {
        bail!("{} problems found", report.problems.len());
    }

    Ok(())
}
