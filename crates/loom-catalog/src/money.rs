//! Price type for catalog amounts.
//!
//! Catalog prices are whole rupees with no minor unit, stored as unsigned
//! integers so a negative price cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used when displaying prices.
pub const RUPEE: &str = "\u{20b9}";

/// A non-negative whole-rupee amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The largest representable price.
    pub const MAX: Price = Price(u64::MAX);

    /// Create a price from a whole-rupee amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Difference to a lower price, or zero if `other` is not lower.
    pub fn saturating_sub(&self, other: Price) -> Price {
        Price(self.0.saturating_sub(other.0))
    }

    /// Format with the rupee symbol and Indian digit grouping
    /// (e.g. "₹1,00,000").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE, group_indian(self.0))
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group digits as lakh/crore: last three digits, then pairs.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
