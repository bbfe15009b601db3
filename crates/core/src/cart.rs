//! Cart state and its mutations.
//!
//! [`Cart`] is a plain ordered list of line items. Every mutation returns a
//! [`CartEvent`] describing what happened; callers decide how to persist the
//! cart and what to tell the customer. Lookups are linear scans, which is
//! fine for a cart of a handful of lines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::totals::Totals;
use crate::types::{Price, ProductId};

/// Chosen product options such as size, color, and material.
///
/// An ordered map, so two selections compare equal regardless of the order
/// the attributes were chosen in.
pub type LineOptions = BTreeMap<String, String>;

/// One product plus chosen options and quantity.
///
/// Name, price, and glyph are copied from the catalog when the line is
/// created. Field names on the wire match the stored `cart` records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    #[serde(rename = "image")]
    pub image_glyph: String,
    pub quantity: u32,
    #[serde(default)]
    pub options: LineOptions,
}

impl CartLineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }

    /// Whether this line is the same product with the same options.
    #[must_use]
    pub fn is_same_line(&self, product_id: ProductId, options: &LineOptions) -> bool {
        self.product_id == product_id && &self.options == options
    }

    /// Non-empty option values joined for display, e.g. `200x250 • Oltin`.
    #[must_use]
    pub fn options_summary(&self) -> String {
        self.options
            .values()
            .filter(|v| !v.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A line was appended or an existing line grew.
    Added {
        product_id: ProductId,
        name: String,
        quantity: u32,
        merged: bool,
    },
    /// Lines for a product were removed (possibly zero of them).
    Removed { product_id: ProductId, lines: usize },
    /// A line's quantity changed and it stays in the cart.
    QuantityChanged { product_id: ProductId, quantity: u32 },
    /// Nothing changed: unknown product, zero quantity, or no such line.
    Ignored,
}

/// Ordered sequence of line items.
///
/// Invariant: every line has `quantity >= 1`. Mutations that would take a
/// line to zero or below remove it instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from stored lines, dropping any with zero quantity.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLineItem>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines (the header badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Add `quantity` of a product with the given options.
    ///
    /// Unknown products and a zero quantity are ignored. A line with the same
    /// product and options grows; otherwise a new line is appended with the
    /// catalog's current name, price, and glyph.
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
        options: LineOptions,
    ) -> CartEvent {
        let Some(product) = catalog.get(product_id) else {
            return CartEvent::Ignored;
        };
        if quantity == 0 {
            return CartEvent::Ignored;
        }

        let merged = if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.is_same_line(product_id, &options))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            true
        } else {
            self.lines.push(CartLineItem {
                product_id,
                name: product.name.to_owned(),
                unit_price: product.unit_price,
                image_glyph: product.image_glyph.to_owned(),
                quantity,
                options,
            });
            false
        };

        CartEvent::Added {
            product_id,
            name: product.name.to_owned(),
            quantity,
            merged,
        }
    }

    /// Remove every line for a product.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartEvent {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        CartEvent::Removed {
            product_id,
            lines: before - self.lines.len(),
        }
    }

    /// Adjust the first line for a product by `delta`.
    ///
    /// A result of zero or below removes the product's lines.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> CartEvent {
        let Some(current) = self.first_line(product_id).map(|l| l.quantity) else {
            return CartEvent::Ignored;
        };
        self.apply_quantity(product_id, i64::from(current).saturating_add(delta))
    }

    /// Set the first line for a product to an absolute quantity.
    ///
    /// Non-positive values remove the product's lines.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartEvent {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        if self.first_line(product_id).is_none() {
            return CartEvent::Ignored;
        }
        self.apply_quantity(product_id, quantity)
    }

    /// Totals for the current contents. Pure; recomputed on every call.
    #[must_use]
    pub fn compute_totals(&self) -> Totals {
        Totals::from_subtotal(self.lines.iter().map(CartLineItem::line_total).sum())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn first_line(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn apply_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartEvent {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                CartEvent::QuantityChanged {
                    product_id,
                    quantity,
                }
            }
            None => CartEvent::Ignored,
        }
    }
}
