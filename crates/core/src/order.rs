//! Order numbers and receipts.
//!
//! Orders are numbered `NC-YYYYMMDD-NNN`, counting up from 001 each
//! calendar day. [`OrderSequence`] holds the counter; callers share it
//! behind a lock.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLineItem};
use crate::checkout::{CheckoutDetails, CustomerDetails, DeliveryOption, PaymentOption};
use crate::totals::Totals;
use crate::types::OrderStatus;

/// Prefix on every order number.
pub const ORDER_NUMBER_PREFIX: &str = "NC";

/// Error parsing an order number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order number: {0}")]
pub struct InvalidOrderNumber(pub String);

/// A day-scoped order number such as `NC-20261019-007`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderNumber {
    date: NaiveDate,
    sequence: u32,
}

impl OrderNumber {
    #[must_use]
    pub const fn new(date: NaiveDate, sequence: u32) -> Self {
        Self { date, sequence }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ORDER_NUMBER_PREFIX}-{}-{:03}",
            self.date.format("%Y%m%d"),
            self.sequence
        )
    }
}

impl FromStr for OrderNumber {
    type Err = InvalidOrderNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidOrderNumber(s.to_owned());
        let mut parts = s.trim().splitn(3, '-');
        let (Some(prefix), Some(date), Some(seq)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if prefix != ORDER_NUMBER_PREFIX {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| invalid())?;
        let sequence = seq.parse::<u32>().map_err(|_| invalid())?;
        if sequence == 0 {
            return Err(invalid());
        }
        Ok(Self { date, sequence })
    }
}

impl Serialize for OrderNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-day order counter.
///
/// The counter restarts at 1 whenever the date moves on.
#[derive(Debug, Default)]
pub struct OrderSequence {
    current: Option<(NaiveDate, u32)>,
}

impl OrderSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Allocate the next number for `date`.
    pub fn next(&mut self, date: NaiveDate) -> OrderNumber {
        let sequence = match self.current {
            Some((day, last)) if day == date => last.saturating_add(1),
            _ => 1,
        };
        self.current = Some((date, sequence));
        OrderNumber::new(date, sequence)
    }
}

/// Snapshot of a placed order, shown on the success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_number: OrderNumber,
    pub status: OrderStatus,
    pub customer: CustomerDetails,
    pub delivery: DeliveryOption,
    pub payment: PaymentOption,
    pub lines: Vec<CartLineItem>,
    pub totals: Totals,
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// Build a pending receipt from the cart and validated checkout.
    #[must_use]
    pub fn new(
        order_number: OrderNumber,
        cart: &Cart,
        details: CheckoutDetails,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_number,
            status: OrderStatus::default(),
            customer: details.customer,
            delivery: details.delivery,
            payment: details.payment,
            lines: cart.lines().to_vec(),
            totals: cart.compute_totals(),
            placed_at,
        }
    }

    /// Total number of items ordered.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::LineOptions;
    use crate::catalog::Catalog;
    use crate::checkout::CheckoutForm;
    use crate::types::{Price, ProductId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_sequence_counts_up_within_a_day() {
        let mut seq = OrderSequence::new();
        assert_eq!(seq.next(day(19)).to_string(), "NC-20261019-001");
        assert_eq!(seq.next(day(19)).to_string(), "NC-20261019-002");
        assert_eq!(seq.next(day(19)).sequence(), 3);
    }

    #[test]
    fn test_sequence_resets_on_new_day() {
        let mut seq = OrderSequence::new();
        seq.next(day(19));
        seq.next(day(19));
        assert_eq!(seq.next(day(20)).to_string(), "NC-20261020-001");
    }

    #[test]
    fn test_parse_order_number() {
        let number: OrderNumber = "NC-20261019-042".parse().unwrap();
        assert_eq!(number.date(), day(19));
        assert_eq!(number.sequence(), 42);
        assert!("XX-20261019-001".parse::<OrderNumber>().is_err());
        assert!("NC-2026-001".parse::<OrderNumber>().is_err());
        assert!("NC-20261019-000".parse::<OrderNumber>().is_err());
        assert!("NC-20261019".parse::<OrderNumber>().is_err());
    }

    #[test]
    fn test_receipt_snapshots_cart() {
        let mut cart = Cart::new();
        cart.add_item(&Catalog::standard(), ProductId::new(1), 2, LineOptions::new());
        let details = CheckoutForm {
            customer_name: "Aziza".to_owned(),
            customer_phone: "+998901234567".to_owned(),
            customer_address: "Navoiy".to_owned(),
            ..CheckoutForm::default()
        }
        .validate()
        .unwrap();

        let receipt = OrderReceipt::new(
            OrderSequence::new().next(day(19)),
            &cart,
            details,
            Utc::now(),
        );
        assert_eq!(receipt.status, OrderStatus::Pending);
        assert_eq!(receipt.item_count(), 2);
        assert_eq!(receipt.totals.total, Price::new(700_000));

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["orderNumber"], "NC-20261019-001");
        let back: OrderReceipt = serde_json::from_value(json).unwrap();
        assert_eq!(back, receipt);
    }
}
