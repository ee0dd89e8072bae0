//! Sort options for listing results.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Sort options for the product listing.
///
/// Deserializing goes through [`SortOption::parse`], so unknown names load
/// as relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum SortOption {
    /// Keep catalog order.
    #[default]
    Relevance,
    /// Effective price, low to high.
    PriceLow,
    /// Effective price, high to low.
    PriceHigh,
    /// Highest numeric id first.
    Newest,
    /// Most reviewed first.
    Popularity,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Newest,
        SortOption::Popularity,
        SortOption::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Newest => "newest",
            SortOption::Popularity => "popularity",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Popularity => "Popularity",
            SortOption::Rating => "Customer Rating",
        }
    }

    /// Parse a sort name. Unknown names fall back to relevance.
    pub fn parse(s: &str) -> Self {
        let wanted = s.trim().to_lowercase();
        match SortOption::ALL.iter().find(|o| o.as_str() == wanted) {
            Some(option) => *option,
            None => {
                tracing::warn!(sort = s, "unknown sort option, using relevance");
                SortOption::Relevance
            }
        }
    }

    /// Compare two products under this option. Relevance treats every
    /// pair as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Relevance => Ordering::Equal,
            SortOption::PriceLow => a.effective_price().cmp(&b.effective_price()),
            SortOption::PriceHigh => b.effective_price().cmp(&a.effective_price()),
            SortOption::Newest => b.id.recency_key().cmp(&a.id.recency_key()),
            SortOption::Popularity => b.reviews_count.cmp(&a.reviews_count),
            SortOption::Rating => b.effective_rating().total_cmp(&a.effective_rating()),
        }
    }
}

impl From<String> for SortOption {
    fn from(name: String) -> Self {
        SortOption::parse(&name)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable in-place sort: products with equal keys keep their prior order.
pub fn sort_products<P: Borrow<Product>>(products: &mut [P], option: SortOption) {
    if option == SortOption::Relevance {
        return;
    }
    products.sort_by(|a, b| option.compare(a.borrow(), b.borrow()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::product;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn listing() -> Vec<Product> {
        let mut a = product("3", "A", 5000, Some(2800));
        a.reviews_count = 40;
        a.rating = Some(4.2);
        let mut b = product("10", "B", 1200, None);
        b.reviews_count = 90;
        b.rating = Some(4.9);
        let mut c = product("7", "C", 2800, None);
        c.reviews_count = 40;
        c.rating = None;
        vec![a, b, c]
    }

    #[test]
    fn test_relevance_is_identity() {
        let mut products = listing();
        sort_products(&mut products, SortOption::Relevance);
        assert_eq!(ids(&products), ["3", "10", "7"]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let mut products = listing();
        sort_products(&mut products, SortOption::PriceLow);
        assert_eq!(ids(&products), ["10", "3", "7"]);

        let mut products = listing();
        sort_products(&mut products, SortOption::PriceHigh);
        assert_eq!(ids(&products), ["3", "7", "10"]);
    }

    #[test]
    fn test_newest_numeric_not_lexical() {
        let mut products = listing();
        sort_products(&mut products, SortOption::Newest);
        assert_eq!(ids(&products), ["10", "7", "3"]);
    }

    #[test]
    fn test_newest_unparseable_ids_sort_last() {
        let mut products = vec![
            product("BT-99", "Draft", 100, None),
            product("2", "Two", 100, None),
            product("x", "Other", 100, None),
        ];
        sort_products(&mut products, SortOption::Newest);
        assert_eq!(ids(&products), ["2", "BT-99", "x"]);
    }

    #[test]
    fn test_popularity_ties_keep_order() {
        let mut products = listing();
        sort_products(&mut products, SortOption::Popularity);
        assert_eq!(ids(&products), ["10", "3", "7"]);
    }

    #[test]
    fn test_rating_unrated_last() {
        let mut products = listing();
        sort_products(&mut products, SortOption::Rating);
        assert_eq!(ids(&products), ["10", "3", "7"]);
    }

    #[test]
    fn test_sort_references() {
        let products = listing();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, SortOption::PriceLow);
        assert_eq!(refs[0].id.as_str(), "10");
    }

    #[test]
    fn test_parse_falls_back_to_relevance() {
        assert_eq!(SortOption::parse("price-low"), SortOption::PriceLow);
        assert_eq!(SortOption::parse(" Newest "), SortOption::Newest);
        assert_eq!(SortOption::parse("cheapest"), SortOption::Relevance);
        assert_eq!(SortOption::parse(""), SortOption::Relevance);
    }

    #[test]
    fn test_unknown_name_deserializes_as_relevance() {
        let sort: SortOption = serde_json::from_str("\"cheapest\"").unwrap();
        assert_eq!(sort, SortOption::Relevance);

        let sort: SortOption = serde_json::from_str("\"price-high\"").unwrap();
        assert_eq!(sort, SortOption::PriceHigh);
        assert_eq!(serde_json::to_string(&sort).unwrap(), "\"price-high\"");
    }
}
