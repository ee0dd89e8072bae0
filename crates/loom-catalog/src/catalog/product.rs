//! Product record and cart handoff summary.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Price;
use crate::search::Dimension;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in a catalog snapshot.
///
/// Field names follow the camelCase snapshot format produced by the admin
/// collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier within a snapshot.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Department, one of the configured categories.
    pub category: String,
    /// Brand, one of the admin-managed brands.
    pub brand: String,
    /// Fabric grade, one of the configured fabrics.
    pub fabric: String,
    /// List price.
    pub retail_price: Price,
    /// Discounted price, never above the retail price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<Price>,
    /// Trade price for wholesale accounts.
    pub wholesale_price: Price,
    /// Units in the warehouse.
    pub stock: u32,
    /// Image references, primary image first.
    pub images: Vec<String>,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Available color labels.
    pub colors: Vec<String>,
    /// Average review rating (0.0 to 5.0). Older records carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub reviews_count: u32,
    /// Shown on the home page rail.
    #[serde(default)]
    pub is_featured: bool,
    /// Carries the best-seller badge.
    #[serde(default)]
    pub is_best_seller: bool,
}

impl Product {
    /// The price a customer pays: the offer price if present, else retail.
    pub fn effective_price(&self) -> Price {
        self.offer_price.unwrap_or(self.retail_price)
    }

    /// Rating used for filtering and sorting; unrated products count as 0.
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Check if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is below the given warning threshold.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    /// Check if an offer price undercuts the retail price.
    pub fn is_on_offer(&self) -> bool {
        self.offer_price
            .map(|offer| offer < self.retail_price)
            .unwrap_or(false)
    }

    /// Saving of the offer against retail, as a whole percentage.
    pub fn discount_percent(&self) -> Option<u64> {
        let offer = self.offer_price?;
        if offer >= self.retail_price || self.retail_price.is_zero() {
            return None;
        }
        let savings = u128::from(self.retail_price.saturating_sub(offer).amount());
        let percent = savings * 100 / u128::from(self.retail_price.amount());
        u64::try_from(percent).ok()
    }

    /// Single-valued attribute for a dimension; `None` for color, which is
    /// multi-valued.
    pub fn attribute(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Category => Some(&self.category),
            Dimension::Brand => Some(&self.brand),
            Dimension::Fabric => Some(&self.fabric),
            Dimension::Color => None,
        }
    }

    /// Check if the product carries a value on a dimension.
    pub fn has_value(&self, dimension: Dimension, value: &str) -> bool {
        match self.attribute(dimension) {
            Some(own) => own == value,
            None => self.colors.iter().any(|c| c == value),
        }
    }

    /// Primary image reference.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check the record against the snapshot contract.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let id = self.id.as_str();

        if self.id.is_blank() {
            return Err(CatalogError::malformed(id, "identifier is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::malformed(id, "name is empty"));
        }
        for (field, value) in [
            ("category", &self.category),
            ("brand", &self.brand),
            ("fabric", &self.fabric),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::malformed(id, format!("{} is empty", field)));
            }
        }
        if self.images.is_empty() {
            return Err(CatalogError::malformed(id, "image list is empty"));
        }
        if self.images.iter().any(|i| i.trim().is_empty()) {
            return Err(CatalogError::malformed(id, "blank image reference"));
        }
        if self.colors.is_empty() {
            return Err(CatalogError::malformed(id, "color list is empty"));
        }
        if self.colors.iter().any(|c| c.trim().is_empty()) {
            return Err(CatalogError::malformed(id, "blank color label"));
        }
        if let Some(offer) = self.offer_price {
            if offer > self.retail_price {
                return Err(CatalogError::malformed(
                    id,
                    format!(
                        "offer price {} exceeds retail price {}",
                        offer.amount(),
                        self.retail_price.amount()
                    ),
                ));
            }
        }
        if let Some(rating) = self.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(CatalogError::malformed(
                    id,
                    format!("rating {} outside 0.0..=5.0", rating),
                ));
            }
        }

        Ok(())
    }

    /// Summary handed by value to the cart collaborator.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            brand: self.brand.clone(),
            price: self.effective_price(),
            retail_price: self.retail_price,
            image: self.primary_image().map(str::to_string),
        }
    }
}

/// Display fields of a product as handed to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Effective price at the time of handoff.
    pub price: Price,
    pub retail_price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
