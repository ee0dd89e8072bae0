//! Product view commands.

use anyhow::{bail, Result};

use loom_catalog::catalog::{Product, LOW_STOCK_THRESHOLD};
use loom_catalog::ProductId;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{price_tag, rating_text, stock_badge};

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store(args.catalog.as_deref())?;
    let snapshot = store.snapshot();

    match args.command {
        ProductsCommand::Featured => list("Featured", &snapshot.featured(), ctx),
        ProductsCommand::BestSellers => list("Best Sellers", &snapshot.best_sellers(), ctx),
        ProductsCommand::LowStock { threshold } => {
            let threshold = threshold.unwrap_or(LOW_STOCK_THRESHOLD);
            let low = snapshot.low_stock(threshold);
            list(&format!("Below {} units", threshold), &low, ctx)
        }
        ProductsCommand::Find { term } => {
            let found = snapshot.search_by_name(&term);
            list(&format!("Matching '{}'", term.trim()), &found, ctx)
        }
        ProductsCommand::Show { id } => {
            let Some(product) = snapshot.get(&ProductId::new(id.trim())) else {
                bail!("Product not found: {}", id);
            };
            show(product, ctx);
            Ok(())
        }
    }
}

fn list(title: &str, products: &[&Product], ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let summaries: Vec<_> = products.iter().map(|p| p.summary()).collect();
        ctx.output.json(&summaries);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", title, products.len()));
    if products.is_empty() {
        ctx.output.info("No products.");
        return Ok(());
    }

    for product in products {
        ctx.output.product_row(product);
    }
    Ok(())
}

fn show(product: &Product, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(product);
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("category", &product.category);
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("fabric", &product.fabric);
    ctx.output.kv("price", &price_tag(product));
    ctx.output.kv("wholesale", &product.wholesale_price.display());
    ctx.output.kv("stock", &stock_badge(product));
    ctx.output.kv("rating", &rating_text(product));
    ctx.output.kv("colors", &product.colors.join(", "));
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }
    for image in &product.images {
        ctx.output.list_item(image);
    }
}
