//! Product matching against a filter selection and search term.

use crate::catalog::Product;
use crate::search::{Dimension, FilterState};

/// A filter selection and search term prepared for repeated matching.
///
/// Dimensions combine with AND; values within a dimension combine with OR.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    filters: &'a FilterState,
    needle: String,
}

impl<'a> Predicate<'a> {
    pub fn new(filters: &'a FilterState, search: &str) -> Self {
        Self {
            filters,
            needle: normalize_search(search),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_name(product)
            && Dimension::ALL
                .iter()
                .all(|&dimension| self.matches_dimension(product, dimension))
            && self.filters.price_range().contains(product.effective_price())
            && self
                .filters
                .rating()
                .map_or(true, |threshold| threshold.admits(product))
            && self.filters.availability().admits(product)
    }

    fn matches_name(&self, product: &Product) -> bool {
        self.needle.is_empty() || product.name.to_lowercase().contains(&self.needle)
    }

    fn matches_dimension(&self, product: &Product, dimension: Dimension) -> bool {
        let selected = self.filters.selected(dimension);
        if selected.is_empty() {
            return true;
        }
        match product.attribute(dimension) {
            Some(value) => selected.iter().any(|s| s == value),
            None => product.colors.iter().any(|c| selected.contains(c)),
        }
    }
}

/// Check one product against a filter selection and search term.
pub fn matches(product: &Product, filters: &FilterState, search: &str) -> bool {
    Predicate::new(filters, search).matches(product)
}

/// Case-insensitive name search; a blank term matches everything.
pub fn matches_search(product: &Product, search: &str) -> bool {
    let needle = normalize_search(search);
    needle.is_empty() || product.name.to_lowercase().contains(&needle)
}

pub(crate) fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::product;
    use crate::search::{Availability, FilterCommand};

    fn saree() -> Product {
        let mut p = product("1", "Kanchipuram Pattu Silk Saree", 24500, Some(21999));
        p.category = "Kanchipuram Silk Sarees".to_string();
        p.fabric = "Silk".to_string();
        p.colors = vec!["Kanchipuram Red".to_string(), "Deep Gold".to_string()];
        p.rating = Some(4.8);
        p
    }

    #[test]
    fn test_defaults_match_everything() {
        let filters = FilterState::default();
        assert!(matches(&saree(), &filters, ""));
        let mut unrated = saree();
        unrated.rating = None;
        unrated.stock = 0;
        assert!(matches(&unrated, &filters, ""));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filters = FilterState::default();
        assert!(matches(&saree(), &filters, "PATTU"));
        assert!(matches(&saree(), &filters, "  silk sa "));
        assert!(!matches(&saree(), &filters, "dhoti"));
        assert!(matches(&saree(), &filters, "   "));
    }

    #[test]
    fn test_search_checks_name_only() {
        let mut p = saree();
        p.description = "temple motifs".to_string();
        assert!(!matches(&p, &FilterState::default(), "temple"));
    }

    #[test]
    fn test_dimension_or_within_and_across() {
        let filters = FilterState::default()
            .with(FilterCommand::toggle(Dimension::Brand, "Poombex"))
            .unwrap()
            .with(FilterCommand::toggle(Dimension::Brand, "Ramraj"))
            .unwrap();
        assert!(matches(&saree(), &filters, ""));

        let filters = filters
            .with(FilterCommand::toggle(Dimension::Fabric, "Cotton"))
            .unwrap();
        assert!(!matches(&saree(), &filters, ""));
    }

    #[test]
    fn test_color_intersection() {
        let filters = FilterState::default()
            .with(FilterCommand::toggle(Dimension::Color, "Deep Gold"))
            .unwrap();
        assert!(matches(&saree(), &filters, ""));

        let filters = FilterState::default()
            .with(FilterCommand::toggle(Dimension::Color, "Royal Blue"))
            .unwrap();
        assert!(!matches(&saree(), &filters, ""));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let at_max = FilterState::default()
            .with(FilterCommand::price_range(0, 21999))
            .unwrap();
        assert!(matches(&saree(), &at_max, ""));

        let at_min = FilterState::default()
            .with(FilterCommand::price_range(21999, 30000))
            .unwrap();
        assert!(matches(&saree(), &at_min, ""));

        let below_retail = FilterState::default()
            .with(FilterCommand::price_range(22000, 30000))
            .unwrap();
        assert!(!matches(&saree(), &below_retail, ""));
    }

    #[test]
    fn test_rating_threshold() {
        let filters = FilterState::default()
            .with(FilterCommand::rating(Some(4.8)))
            .unwrap();
        assert!(matches(&saree(), &filters, ""));

        let filters = FilterState::default()
            .with(FilterCommand::rating(Some(4.9)))
            .unwrap();
        assert!(!matches(&saree(), &filters, ""));
    }

    #[test]
    fn test_availability() {
        let filters = FilterState::default()
            .with(FilterCommand::availability(Availability::InStockOnly))
            .unwrap();
        let mut sold_out = saree();
        sold_out.stock = 0;
        assert!(matches(&saree(), &filters, ""));
        assert!(!matches(&sold_out, &filters, ""));
    }
}
