//! Facet listing command.

use anyhow::{bail, Result};

use loom_catalog::search::{facets, Dimension, Facet, FilterCommand, FilterState};
use loom_catalog::CatalogError;

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store(args.catalog.as_deref())?;
    let snapshot = store.snapshot();

    let filters = selection(&args)?;

    let mut all = facets(&snapshot, &store.facets(), &filters);
    if let Some(name) = &args.dimension {
        let Some(dimension) = Dimension::parse(name) else {
            bail!("Unknown dimension '{}'. Expected category, brand, fabric or color.", name);
        };
        all.retain(|facet| facet.dimension == dimension);
    }

    if ctx.output.is_json() {
        ctx.output.json(&all);
        return Ok(());
    }

    for facet in &all {
        print_facet(facet, ctx);
    }

    Ok(())
}

/// Values to mark as selected. Repeating a value does not unselect it.
fn selection(args: &FacetsArgs) -> Result<FilterState, CatalogError> {
    let mut filters = FilterState::default();
    let selections = [
        (Dimension::Brand, &args.brands),
        (Dimension::Category, &args.categories),
    ];
    for (dimension, values) in selections {
        for value in values {
            if !filters.is_selected(dimension, value) {
                filters.apply(FilterCommand::toggle(dimension, value.as_str()))?;
            }
        }
    }
    Ok(filters)
}

fn print_facet(facet: &Facet, ctx: &Context) {
    ctx.output.header(facet.dimension.display_name());

    if facet.options.is_empty() {
        ctx.output.info("No values.");
        return;
    }

    for option in &facet.options {
        let mark = if option.selected { "[x]" } else { "[ ]" };
        let count = option.count.to_string();
        ctx.output.table_row(&[mark, &option.value, &count], &[3, 28, 4]);
    }
}
