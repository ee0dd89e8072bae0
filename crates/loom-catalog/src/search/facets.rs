//! Facet dimensions and the values offered for each.
//!
//! Facet lists are static: they never narrow based on the other active
//! filters. Category, brand and fabric come from the configured master
//! lists so a value with no products can still be offered; colors are the
//! union of every product's colors in first-seen order.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSnapshot, Product};
use crate::error::CatalogError;
use crate::search::{FilterState, PriceRange};

/// A filterable product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Brand,
    Fabric,
    Color,
}

impl Dimension {
    /// All dimensions in chip/display order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Category,
        Dimension::Brand,
        Dimension::Fabric,
        Dimension::Color,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Brand => "brand",
            Dimension::Fabric => "fabric",
            Dimension::Color => "color",
        }
    }

    /// Heading shown above the facet's options.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Category => "Departments",
            Dimension::Brand => "Brands",
            Dimension::Fabric => "Fabric",
            Dimension::Color => "Colors",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "category" | "categories" => Some(Dimension::Category),
            "brand" | "brands" => Some(Dimension::Brand),
            "fabric" | "fabrics" => Some(Dimension::Fabric),
            "color" | "colors" | "colour" | "colours" => Some(Dimension::Color),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin-managed master lists for the single-valued dimensions.
///
/// An empty list means "not configured": any value is accepted at
/// ingestion and the facet falls back to the values found in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub fabrics: Vec<String>,
}

impl FacetConfig {
    /// Configured master list, if any, for a dimension.
    pub fn master_list(&self, dimension: Dimension) -> Option<&[String]> {
        let list = match dimension {
            Dimension::Category => &self.categories,
            Dimension::Brand => &self.brands,
            Dimension::Fabric => &self.fabrics,
            Dimension::Color => return None,
        };
        if list.is_empty() {
            None
        } else {
            Some(list)
        }
    }

    /// Check a product's single-valued attributes against the master lists.
    pub fn check_product(&self, product: &Product) -> Result<(), CatalogError> {
        for dimension in [Dimension::Category, Dimension::Brand, Dimension::Fabric] {
            let (Some(list), Some(value)) = (self.master_list(dimension), product.attribute(dimension))
            else {
                continue;
            };
            if !list.iter().any(|v| v == value) {
                tracing::warn!(product = %product.id, %dimension, value, "value not in master list");
                return Err(CatalogError::UnknownFacetValue {
                    dimension: dimension.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Add a brand. Returns `false` if it was already listed.
    pub fn add_brand(&mut self, brand: impl Into<String>) -> bool {
        let brand = brand.into();
        if brand.trim().is_empty() || self.brands.contains(&brand) {
            return false;
        }
        self.brands.push(brand);
        true
    }

    /// Remove a brand. Returns `false` if it was not listed.
    pub fn remove_brand(&mut self, brand: &str) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b != brand);
        self.brands.len() != before
    }
}

/// Distinct selectable values for one dimension.
pub fn facet_values(
    catalog: &CatalogSnapshot,
    config: &FacetConfig,
    dimension: Dimension,
) -> Vec<String> {
    if let Some(list) = config.master_list(dimension) {
        return list.to_vec();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for product in catalog {
        let own: Vec<&str> = match product.attribute(dimension) {
            Some(value) => vec![value],
            None => product.colors.iter().map(String::as_str).collect(),
        };
        for value in own {
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// One selectable facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    /// Products carrying this value across the whole snapshot.
    pub count: usize,
    /// Whether the value is currently selected.
    pub selected: bool,
}

/// A dimension with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub dimension: Dimension,
    pub options: Vec<FacetOption>,
}

/// Options for one dimension with whole-catalog counts and selection state.
pub fn facet_options(
    catalog: &CatalogSnapshot,
    config: &FacetConfig,
    dimension: Dimension,
    filters: &FilterState,
) -> Vec<FacetOption> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in catalog {
        match product.attribute(dimension) {
            Some(value) => *counts.entry(value).or_insert(0) += 1,
            None => {
                let distinct: HashSet<&str> = product.colors.iter().map(String::as_str).collect();
                for color in distinct {
                    *counts.entry(color).or_insert(0) += 1;
                }
            }
        }
    }

    facet_values(catalog, config, dimension)
        .into_iter()
        .map(|value| FacetOption {
            count: counts.get(value.as_str()).copied().unwrap_or(0),
            selected: filters.is_selected(dimension, &value),
            value,
        })
        .collect()
}

/// Every facet in display order.
pub fn facets(catalog: &CatalogSnapshot, config: &FacetConfig, filters: &FilterState) -> Vec<Facet> {
    Dimension::ALL
        .iter()
        .map(|&dimension| Facet {
            dimension,
            options: facet_options(catalog, config, dimension, filters),
        })
        .collect()
}

/// Lowest and highest effective price in the snapshot, for the price slider.
pub fn price_bounds(catalog: &CatalogSnapshot) -> Option<PriceRange> {
    let mut prices = catalog.iter().map(Product::effective_price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    PriceRange::new(min.amount(), max.amount()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::product;
    use crate::search::FilterCommand;

    fn catalog() -> CatalogSnapshot {
        let mut a = product("1", "Kanchipuram", 24500, Some(21999));
        a.brand = "Ramraj".to_string();
        a.colors = vec!["Red".to_string(), "Gold".to_string()];
        let mut b = product("2", "Banarasi", 15800, Some(13500));
        b.brand = "Uathayam".to_string();
        b.colors = vec!["Blue".to_string(), "Red".to_string()];
        let mut c = product("3", "Dhoti", 1200, None);
        c.brand = "Ramraj".to_string();
        c.colors = vec!["White".to_string()];
        CatalogSnapshot::new(vec![a, b, c]).unwrap()
    }

    #[test]
    fn test_colors_first_seen_order() {
        let values = facet_values(&catalog(), &FacetConfig::default(), Dimension::Color);
        assert_eq!(values, vec!["Red", "Gold", "Blue", "White"]);
    }

    #[test]
    fn test_master_list_wins_over_catalog() {
        let config = FacetConfig {
            brands: vec!["Poombex".to_string(), "Ramraj".to_string(), "Uathayam".to_string()],
            ..FacetConfig::default()
        };
        let values = facet_values(&catalog(), &config, Dimension::Brand);
        assert_eq!(values, vec!["Poombex", "Ramraj", "Uathayam"]);
    }

    #[test]
    fn test_unconfigured_dimension_derived_from_catalog() {
        let values = facet_values(&catalog(), &FacetConfig::default(), Dimension::Brand);
        assert_eq!(values, vec!["Ramraj", "Uathayam"]);
    }

    #[test]
    fn test_options_count_and_selection() {
        let config = FacetConfig {
            brands: vec!["Poombex".to_string(), "Ramraj".to_string()],
            ..FacetConfig::default()
        };
        let mut filters = FilterState::default();
        filters
            .apply(FilterCommand::toggle(Dimension::Brand, "Ramraj"))
            .unwrap();

        let options = facet_options(&catalog(), &config, Dimension::Brand, &filters);
        assert_eq!(options[0], FacetOption { value: "Poombex".into(), count: 0, selected: false });
        assert_eq!(options[1], FacetOption { value: "Ramraj".into(), count: 2, selected: true });
    }

    #[test]
    fn test_options_not_narrowed_by_other_filters() {
        let mut filters = FilterState::default();
        filters
            .apply(FilterCommand::toggle(Dimension::Brand, "Uathayam"))
            .unwrap();
        let colors = facet_options(&catalog(), &FacetConfig::default(), Dimension::Color, &filters);
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0].count, 2);
    }

    #[test]
    fn test_price_bounds() {
        let bounds = price_bounds(&catalog()).unwrap();
        assert_eq!(bounds.min(), 1200);
        assert_eq!(bounds.max(), 21999);
        assert!(price_bounds(&CatalogSnapshot::empty()).is_none());
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!(Dimension::parse("Brand"), Some(Dimension::Brand));
        assert_eq!(Dimension::parse("colours"), Some(Dimension::Color));
        assert_eq!(Dimension::parse("size"), None);
    }

    #[test]
    fn test_add_and_remove_brand() {
        let mut config = FacetConfig::default();
        assert!(config.add_brand("Ramraj"));
        assert!(!config.add_brand("Ramraj"));
        assert!(!config.add_brand("  "));
        assert!(config.remove_brand("Ramraj"));
        assert!(!config.remove_brand("Ramraj"));
    }
}
