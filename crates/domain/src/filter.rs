//! List filters accepted by the catalogue listing.

use crate::error::ValidationError;

/// Selection applied when listing furniture.
///
/// At most one criterion is ever active. Each criterion also fixes the order
/// of the results.
#[derive(Debug, Clone, PartialEq)]
pub enum ListFilter {
    /// Whole collection, in storage order.
    All,
    /// Exact category match, sorted by name ascending.
    Category(String),
    /// `price >= bound`, sorted by price ascending.
    PriceAtLeast(f64),
    /// `price <= bound`, sorted by price descending.
    PriceAtMost(f64),
}

impl ListFilter {
    /// Pick the active filter from the raw query parameters.
    ///
    /// Priority is `categoria`, then `precio_gte`, then `precio_lte`; empty
    /// values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] when the chosen price bound
    /// is not a number.
    pub fn from_params(
        category: Option<&str>,
        price_gte: Option<&str>,
        price_lte: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if let Some(category) = present(category) {
            return Ok(Self::Category(category.to_string()));
        }
        if let Some(bound) = present(price_gte) {
            return parse_price(bound).map(Self::PriceAtLeast);
        }
        if let Some(bound) = present(price_lte) {
            return parse_price(bound).map(Self::PriceAtMost);
        }
        Ok(Self::All)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| ValidationError::InvalidPrice(raw.to_string()))
}
