//! Product listing filter and sort.
//!
//! The listing page narrows the catalog by category, price band, and a name
//! search, then orders what is left. Everything here is pure; the handler
//! turns query parameters into a [`ListingQuery`] and renders the result.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product};
use crate::types::Price;

/// Error parsing a price band string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceBandError {
    #[error("price band is empty")]
    Empty,
    #[error("invalid price bound: {0}")]
    InvalidBound(String),
    #[error("price band lower bound {min} exceeds upper bound {max}")]
    Inverted { min: i64, max: i64 },
}

/// Inclusive price range from the `price` filter.
///
/// Written as `min-max` (both ends inclusive) or `min+` (no upper bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min: Price,
    pub max: Option<Price>,
}

impl PriceBand {
    /// Whether a price falls inside the band.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(raw: &str) -> Result<i64, PriceBandError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| PriceBandError::InvalidBound(raw.to_owned()))
}

impl FromStr for PriceBand {
    type Err = PriceBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceBandError::Empty);
        }

        if let Some(min) = s.strip_suffix('+') {
            return Ok(Self {
                min: Price::new(parse_bound(min)?),
                max: None,
            });
        }

        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| PriceBandError::InvalidBound(s.to_owned()))?;
        let min = parse_bound(min)?;
        let max = parse_bound(max)?;
        if min > max {
            return Err(PriceBandError::Inverted { min, max });
        }
        Ok(Self {
            min: Price::new(min),
            max: Some(Price::new(max)),
        })
    }
}

/// Listing sort order.
///
/// `newest` and `popular` keep catalog order: products carry no date or
/// popularity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Popular,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Newest, Self::PriceLow, Self::PriceHigh, Self::Popular];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Eng yangi",
            Self::Popular => "Mashhur",
            Self::PriceLow => "Narx: arzon",
            Self::PriceHigh => "Narx: qimmat",
        }
    }

    /// Parse a `sort` parameter, falling back to the default for unknown values.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == raw.trim())
            .unwrap_or_default()
    }
}

/// Fixed price bands offered by the filter dropdown: `(value, label)`.
pub const PRICE_BANDS: [(&str, &str); 4] = [
    ("0-300000", "300 000 so'mgacha"),
    ("300000-400000", "300 000 - 400 000 so'm"),
    ("400000-500000", "400 000 - 500 000 so'm"),
    ("500000+", "500 000 so'mdan yuqori"),
];

/// A parsed listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: Option<Category>,
    pub price_band: Option<PriceBand>,
    pub sort: SortOrder,
    pub search: Option<String>,
}

impl ListingQuery {
    /// Build a query from raw parameter values.
    ///
    /// Unknown categories, unparseable bands, and blank search terms are
    /// treated as "no filter" rather than errors.
    #[must_use]
    pub fn from_params(
        category: Option<&str>,
        price: Option<&str>,
        sort: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            category: category.and_then(|c| c.parse().ok()),
            price_band: price.and_then(|p| p.parse().ok()),
            sort: sort.map(SortOrder::from_param).unwrap_or_default(),
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        }
    }

    /// Whether a product passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.category.is_none_or(|c| product.category == c);
        let price_ok = self
            .price_band
            .is_none_or(|band| band.contains(product.unit_price));
        let search_ok = self.search.as_deref().is_none_or(|term| {
            product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        category_ok && price_ok && search_ok
    }

    /// Visible products in display order.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog) -> Vec<&'static Product> {
        let mut visible: Vec<_> = catalog.iter().filter(|p| self.matches(p)).collect();
        // sort_by_key is stable, so equal prices keep catalog order.
        match self.sort {
            SortOrder::PriceLow => visible.sort_by_key(|p| p.unit_price),
            SortOrder::PriceHigh => visible.sort_by_key(|p| core::cmp::Reverse(p.unit_price)),
            SortOrder::Newest | SortOrder::Popular => {}
        }
        visible
    }
}
