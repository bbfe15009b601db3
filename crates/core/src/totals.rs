//! Derived order totals.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Orders at or above this subtotal ship for free.
pub const FREE_SHIPPING_THRESHOLD: Price = Price::new(500_000);

/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING: Price = Price::new(50_000);

/// Label shown instead of a zero shipping fee.
pub const FREE_SHIPPING_LABEL: &str = "Bepul";

/// Totals derived from a cart.
///
/// Carts never store these; only an order receipt keeps a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Price,
    pub shipping: Price,
    pub discount: Price,
    pub total: Price,
}

impl Totals {
    /// Totals for a given subtotal.
    ///
    /// Discount is always zero: promo codes are acknowledged but not applied.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            FLAT_SHIPPING
        };
        let discount = Price::ZERO;
        Self {
            subtotal,
            shipping,
            discount,
            total: subtotal + shipping - discount,
        }
    }

    /// Shipping as displayed: `Bepul` when free, the amount otherwise.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            FREE_SHIPPING_LABEL.to_owned()
        } else {
            self.shipping.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_at_threshold() {
        let totals = Totals::from_subtotal(Price::new(500_000));
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.total, Price::new(500_000));
        assert_eq!(totals.shipping_label(), "Bepul");
    }

    #[test]
    fn test_flat_shipping_below_threshold() {
        let totals = Totals::from_subtotal(Price::new(499_999));
        assert_eq!(totals.shipping, FLAT_SHIPPING);
        assert_eq!(totals.total, Price::new(549_999));
        assert_eq!(totals.shipping_label(), "50 000 so'm");
    }

    #[test]
    fn test_empty_subtotal_still_charges_shipping() {
        let totals = Totals::from_subtotal(Price::ZERO);
        assert_eq!(totals.shipping, FLAT_SHIPPING);
        assert_eq!(totals.discount, Price::ZERO);
    }
}
