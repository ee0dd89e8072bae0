//! Filter state and the commands that mutate it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::money::Price;
use crate::search::Dimension;

/// Inclusive effective-price bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u64, u64)", into = "(u64, u64)")]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, CatalogError> {
        if min > max {
            return Err(CatalogError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The unconstrained range.
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, price: Price) -> bool {
        (self.min..=self.max).contains(&price.amount())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<(u64, u64)> for PriceRange {
    type Error = CatalogError;

    fn try_from((min, max): (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (u64, u64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

/// Minimum effective rating, always a finite value in 0.0..=5.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RatingThreshold(f64);

impl RatingThreshold {
    pub fn new(value: f64) -> Result<Self, CatalogError> {
        if !(0.0..=crate::catalog::MAX_RATING).contains(&value) {
            return Err(CatalogError::InvalidRating(value));
        }
        // -0.0 and 0.0 must hash alike.
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn admits(&self, product: &Product) -> bool {
        product.effective_rating() >= self.0
    }
}

// NaN is rejected on construction, so bitwise equality is total.
impl Eq for RatingThreshold {}

impl std::hash::Hash for RatingThreshold {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for RatingThreshold {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingThreshold> for f64 {
    fn from(threshold: RatingThreshold) -> Self {
        threshold.0
    }
}

/// Stock constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    All,
    InStockOnly,
}

impl Availability {
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            Availability::All => true,
            Availability::InStockOnly => product.is_in_stock(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::All => "all",
            Availability::InStockOnly => "in-stock-only",
        }
    }
}

/// A single, well-typed change to a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum FilterCommand {
    /// Select the value if unselected, otherwise unselect it.
    ToggleValue { dimension: Dimension, value: String },
    /// Replace the price bounds.
    SetPriceRange { min: u64, max: u64 },
    /// Set or clear the rating threshold.
    SetRating { threshold: Option<f64> },
    /// Set the stock constraint.
    SetAvailability { mode: Availability },
    /// Reset everything to defaults.
    ClearAll,
}

impl FilterCommand {
    pub fn toggle(dimension: Dimension, value: impl Into<String>) -> Self {
        FilterCommand::ToggleValue {
            dimension,
            value: value.into(),
        }
    }

    pub fn price_range(min: u64, max: u64) -> Self {
        FilterCommand::SetPriceRange { min, max }
    }

    pub fn rating(threshold: Option<f64>) -> Self {
        FilterCommand::SetRating { threshold }
    }

    pub fn availability(mode: Availability) -> Self {
        FilterCommand::SetAvailability { mode }
    }
}

/// The shopper's filter selection.
///
/// An empty selection on a dimension leaves it unconstrained. Selections
/// keep the order in which values were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default, deserialize_with = "distinct")]
    category: Vec<String>,
    #[serde(default, deserialize_with = "distinct")]
    brand: Vec<String>,
    #[serde(default, deserialize_with = "distinct")]
    fabric: Vec<String>,
    #[serde(default, deserialize_with = "distinct")]
    color: Vec<String>,
    #[serde(default)]
    price_range: PriceRange,
    #[serde(default)]
    rating: Option<RatingThreshold>,
    #[serde(default)]
    availability: Availability,
}

/// Selections are sets: repeated values collapse to their first occurrence.
fn distinct<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Vec::<String>::deserialize(deserializer)?;
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    Ok(unique)
}

impl FilterState {
    /// Defaults with one category pre-selected, as on a category landing page.
    pub fn for_category(category: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.category.push(category.into());
        state
    }

    /// Apply a command. On error the state is left unchanged.
    pub fn apply(&mut self, command: FilterCommand) -> Result<(), CatalogError> {
        match command {
            FilterCommand::ToggleValue { dimension, value } => {
                self.toggle(dimension, value);
            }
            FilterCommand::SetPriceRange { min, max } => {
                self.price_range = PriceRange::new(min, max)?;
            }
            FilterCommand::SetRating { threshold } => {
                self.rating = threshold.map(RatingThreshold::new).transpose()?;
            }
            FilterCommand::SetAvailability { mode } => {
                self.availability = mode;
            }
            FilterCommand::ClearAll => {
                *self = Self::default();
            }
        }
        Ok(())
    }

    /// Builder form of [`FilterState::apply`].
    pub fn with(mut self, command: FilterCommand) -> Result<Self, CatalogError> {
        self.apply(command)?;
        Ok(self)
    }

    fn toggle(&mut self, dimension: Dimension, value: String) {
        let selected = self.selection_mut(dimension);
        if let Some(position) = selected.iter().position(|v| *v == value) {
            selected.remove(position);
        } else {
            selected.push(value);
        }
    }

    fn selection_mut(&mut self, dimension: Dimension) -> &mut Vec<String> {
        match dimension {
            Dimension::Category => &mut self.category,
            Dimension::Brand => &mut self.brand,
            Dimension::Fabric => &mut self.fabric,
            Dimension::Color => &mut self.color,
        }
    }

    /// Selected values on a dimension, in selection order.
    pub fn selected(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Category => &self.category,
            Dimension::Brand => &self.brand,
            Dimension::Fabric => &self.fabric,
            Dimension::Color => &self.color,
        }
    }

    pub fn is_selected(&self, dimension: Dimension, value: &str) -> bool {
        self.selected(dimension).iter().any(|v| v == value)
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn rating(&self) -> Option<RatingThreshold> {
        self.rating
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Check if nothing constrains the result.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
