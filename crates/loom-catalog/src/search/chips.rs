//! Removable chips for the active filters.
//!
//! Chips depend on the filter state alone, never on the catalog or the
//! result set.

use serde::{Deserialize, Serialize};

use crate::search::{Dimension, FilterCommand, FilterState, RatingThreshold};

/// What a chip stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChipKey {
    /// One selected value on a facet dimension.
    Value { dimension: Dimension, value: String },
    /// The rating threshold.
    Rating { threshold: RatingThreshold },
}

/// A removable token for one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chip {
    pub key: ChipKey,
    pub label: String,
}

impl Chip {
    fn value(dimension: Dimension, value: &str) -> Self {
        Self {
            key: ChipKey::Value {
                dimension,
                value: value.to_string(),
            },
            label: value.to_string(),
        }
    }

    fn rating(threshold: RatingThreshold) -> Self {
        Self {
            key: ChipKey::Rating { threshold },
            label: format!("{:.1}\u{2605} & above", threshold.value()),
        }
    }

    /// Dimension name ("category", ..., "rating").
    pub fn dimension_name(&self) -> &'static str {
        match &self.key {
            ChipKey::Value { dimension, .. } => dimension.as_str(),
            ChipKey::Rating { .. } => "rating",
        }
    }

    /// The filter value the chip stands for.
    pub fn value_text(&self) -> String {
        match &self.key {
            ChipKey::Value { value, .. } => value.clone(),
            ChipKey::Rating { threshold } => format!("{:.1}", threshold.value()),
        }
    }

    /// The command that removes exactly this filter.
    pub fn removal(&self) -> FilterCommand {
        match &self.key {
            ChipKey::Value { dimension, value } => FilterCommand::toggle(*dimension, value.clone()),
            ChipKey::Rating { .. } => FilterCommand::rating(None),
        }
    }
}

/// Chips in dimension order (category, brand, fabric, color, rating), each
/// dimension in selection order.
pub fn project_chips(filters: &FilterState) -> Vec<Chip> {
    let mut chips: Vec<Chip> = Dimension::ALL
        .iter()
        .flat_map(|&dimension| {
            filters
                .selected(dimension)
                .iter()
                .map(move |value| Chip::value(dimension, value))
        })
        .collect();

    if let Some(threshold) = filters.rating() {
        chips.push(Chip::rating(threshold));
    }

    chips
}
