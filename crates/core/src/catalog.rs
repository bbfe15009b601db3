//! Static product catalog.
//!
//! The storefront sells a fixed range, so the catalog is compiled in and
//! read-only. Cart lines copy the fields they display at add time; the
//! catalog is only consulted again when a new line is added.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Product category used by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classic,
    Modern,
    Luxury,
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Classic, Self::Modern, Self::Luxury, Self::Accessories];

    /// URL and `data-category` value.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Luxury => "luxury",
            Self::Accessories => "accessories",
        }
    }

    /// Customer-facing name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Klassik",
            Self::Modern => "Zamonaviy",
            Self::Luxury => "Hashamatli",
            Self::Accessories => "Aksessuarlar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a category slug is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub unit_price: Price,
    pub image_glyph: &'static str,
    pub category: Category,
}

const fn product(
    id: i32,
    name: &'static str,
    unit_price: i64,
    image_glyph: &'static str,
    category: Category,
) -> Product {
    Product {
        id: ProductId::new(id),
        name,
        unit_price: Price::new(unit_price),
        image_glyph,
        category,
    }
}

static PRODUCTS: [Product; 9] = [
    product(1, "Oltin Klassik Parda", 350_000, "🏺", Category::Classic),
    product(2, "Zamonaviy Oq Parda", 280_000, "🎭", Category::Modern),
    product(3, "Hashamatli Bej Parda", 520_000, "🌟", Category::Luxury),
    product(4, "Rangli Dizayn Parda", 420_000, "🎨", Category::Modern),
    product(5, "Klassik Qizil Parda", 390_000, "🏛️", Category::Classic),
    product(6, "Royal Oltin Parda", 680_000, "👑", Category::Luxury),
    product(7, "Tungi Ko'k Parda", 320_000, "🌙", Category::Modern),
    product(8, "Premium Karniz", 150_000, "📏", Category::Accessories),
    product(9, "Eco Yashil Parda", 380_000, "🍃", Category::Modern),
];

/// Read-only product lookup.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    /// The storefront's product range.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            products: &PRODUCTS,
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    pub fn iter(&self) -> core::slice::Iter<'static, Product> {
        self.products.iter()
    }

    /// The first `n` products, shown on the home page.
    #[must_use]
    pub fn featured(&self, n: usize) -> &'static [Product] {
        self.products.get(..n).unwrap_or(self.products)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
