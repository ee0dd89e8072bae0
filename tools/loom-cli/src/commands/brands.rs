//! Brand master list commands.

use anyhow::{bail, Context as _, Result};

use loom_catalog::search::{facet_options, Dimension, FacetConfig, FilterState};

use super::{BrandsArgs, BrandsCommand};
use crate::context::Context;

/// Run the brands command.
pub fn run(args: BrandsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store(args.catalog.as_deref())?;

    match args.command {
        BrandsCommand::List => {
            let options = facet_options(
                &store.snapshot(),
                &store.facets(),
                Dimension::Brand,
                &FilterState::default(),
            );
            if ctx.output.is_json() {
                ctx.output.json(&options);
                return Ok(());
            }
            ctx.output.header("Brands");
            for option in &options {
                ctx.output
                    .list_item(&format!("{} ({} products)", option.value, option.count));
            }
            Ok(())
        }
        BrandsCommand::Add { name } => {
            let name = brand_name(&name)?;
            if !store.add_brand(name) {
                ctx.output.info(&format!("Brand '{}' is already listed", name));
                return Ok(());
            }
            save_facets(ctx, &store.facets())?;
            ctx.output.success(&format!("Added brand '{}'", name));
            Ok(())
        }
        BrandsCommand::Remove { name } => {
            let name = brand_name(&name)?;
            let removed = store
                .remove_brand(name)
                .with_context(|| format!("Cannot remove brand '{}'", name))?;
            if !removed {
                ctx.output.info(&format!("Brand '{}' is not listed", name));
                return Ok(());
            }
            save_facets(ctx, &store.facets())?;
            ctx.output.success(&format!("Removed brand '{}'", name));
            Ok(())
        }
    }
}

/// Trimmed brand name. Blank names are rejected.
fn brand_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Brand name must not be blank");
    }
    Ok(name)
}

/// Write the updated master lists back to the config file.
fn save_facets(ctx: &Context, facets: &FacetConfig) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Create loom.toml or pass --config.");
    };

    let mut config = ctx.config.clone();
    config.facets = facets.clone();
    config.save(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_name_trimmed() {
        assert_eq!(brand_name("  Kumaran ").unwrap(), "Kumaran");
    }

    #[test]
    fn test_blank_brand_name_rejected() {
        let err = brand_name("   ").unwrap_err();
        assert_eq!(err.to_string(), "Brand name must not be blank");
        assert!(brand_name("").is_err());
    }
}
