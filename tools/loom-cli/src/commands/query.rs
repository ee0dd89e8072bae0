//! Catalog query command.

use anyhow::{Context as _, Result};

use loom_catalog::search::{
    price_bounds, Availability, BrowseSession, Dimension, FilterCommand, SortOption,
};
use loom_catalog::{CatalogError, Price};

use super::QueryArgs;
use crate::context::Context;
use crate::output::rating_text;

/// Run the query command.
pub fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store(args.catalog.as_deref())?;
    let snapshot = store.snapshot();

    let session = build_session(&args, ctx.config.default_sort()).context("Invalid filter")?;
    let result = session.run(&snapshot);

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} products, sorted by {}",
        result.count,
        session.sort().display_name()
    ));

    if let Some(bounds) = price_bounds(&snapshot) {
        let ceiling = ctx
            .config
            .defaults
            .price_ceiling
            .unwrap_or(bounds.max())
            .max(bounds.max());
        ctx.output.kv(
            "price range",
            &format!(
                "{} - {}",
                Price::new(bounds.min()).display(),
                Price::new(ceiling).display()
            ),
        );
    }

    if !result.chips.is_empty() {
        let chips: Vec<String> = result.chips.iter().map(|c| format!("[{} ×]", c.label)).collect();
        ctx.output.kv("filters", &chips.join(" "));
    }

    if result.is_empty() {
        ctx.output.info("No products match. Try clearing some filters.");
        return Ok(());
    }

    println!();
    let limit = args.limit.unwrap_or(result.count);
    for product in result.items.iter().take(limit) {
        ctx.output.product_row(product);
        ctx.output.debug(&format!(
            "{} / {} / {} / {}",
            product.category,
            product.fabric,
            product.colors.join(", "),
            rating_text(product)
        ));
    }

    if limit < result.count {
        ctx.output.info(&format!("... and {} more", result.count - limit));
    }

    Ok(())
}

/// Translate command-line filters into a browsing session.
fn build_session(args: &QueryArgs, default_sort: SortOption) -> Result<BrowseSession, CatalogError> {
    let mut session = BrowseSession::new();

    let selections = [
        (Dimension::Category, &args.categories),
        (Dimension::Brand, &args.brands),
        (Dimension::Fabric, &args.fabrics),
        (Dimension::Color, &args.colors),
    ];
    for (dimension, values) in selections {
        for value in values {
            if !session.filters().is_selected(dimension, value) {
                session.apply(FilterCommand::toggle(dimension, value.as_str()))?;
            }
        }
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        session.apply(FilterCommand::price_range(
            args.min_price.unwrap_or(0),
            args.max_price.unwrap_or(u64::MAX),
        ))?;
    }

    if args.rating.is_some() {
        session.apply(FilterCommand::rating(args.rating))?;
    }

    if args.in_stock {
        session.apply(FilterCommand::availability(Availability::InStockOnly))?;
    }

    if let Some(search) = &args.search {
        session.set_search(search.as_str());
    }

    session.set_sort(args.sort.as_deref().map(SortOption::parse).unwrap_or(default_sort));

    Ok(session)
}
