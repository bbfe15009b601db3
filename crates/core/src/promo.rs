//! Promo codes.
//!
//! Codes are recognised and acknowledged but never change totals; discounts
//! will be applied once orders are priced server-side.

use rust_decimal::Decimal;

/// What a promo code would grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoBenefit {
    /// Percentage off the subtotal, as a fraction (`0.15` for 15%).
    Percentage(Decimal),
    FreeShipping,
}

/// A recognised promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCode {
    pub code: &'static str,
    pub benefit: PromoBenefit,
    pub description: &'static str,
}

static PROMO_CODES: [PromoCode; 3] = [
    PromoCode {
        code: "NAVOI15",
        benefit: PromoBenefit::Percentage(Decimal::from_parts(15, 0, 0, false, 2)),
        description: "15% chegirma",
    },
    PromoCode {
        code: "YANGI10",
        benefit: PromoBenefit::Percentage(Decimal::from_parts(10, 0, 0, false, 2)),
        description: "10% chegirma yangi mijozlar uchun",
    },
    PromoCode {
        code: "BEPUL",
        benefit: PromoBenefit::FreeShipping,
        description: "Bepul yetkazib berish",
    },
];

/// Message shown for an unrecognised code.
pub const INVALID_PROMO_MESSAGE: &str = "❌ Noto'g'ri chegirma kodi";

/// Look up a code, ignoring case and surrounding whitespace.
#[must_use]
pub fn lookup(raw: &str) -> Option<&'static PromoCode> {
    let code = raw.trim().to_uppercase();
    PROMO_CODES.iter().find(|p| p.code == code)
}

/// Outcome of applying a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoOutcome {
    Applied(&'static PromoCode),
    Invalid,
}

impl PromoOutcome {
    /// Evaluate a submitted code.
    #[must_use]
    pub fn evaluate(raw: &str) -> Self {
        lookup(raw).map_or(Self::Invalid, Self::Applied)
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Customer-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Applied(promo) => format!("✅ Chegirma kodi qo'llandi: {}", promo.description),
            Self::Invalid => INVALID_PROMO_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, LineOptions};
    use crate::catalog::Catalog;
    use crate::types::ProductId;

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let promo = lookup("  navoi15 ").map(|p| p.code);
        assert_eq!(promo, Some("NAVOI15"));
        assert!(lookup("NAVOI16").is_none());
    }

    #[test]
    fn test_rates() {
        assert_eq!(
            lookup("YANGI10").map(|p| p.benefit),
            Some(PromoBenefit::Percentage(Decimal::new(10, 2)))
        );
        assert_eq!(
            lookup("bepul").map(|p| p.benefit),
            Some(PromoBenefit::FreeShipping)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PromoOutcome::evaluate("NAVOI15").message(),
            "✅ Chegirma kodi qo'llandi: 15% chegirma"
        );
        assert_eq!(PromoOutcome::evaluate("xyz").message(), INVALID_PROMO_MESSAGE);
    }

    #[test]
    fn test_codes_never_change_totals() {
        let mut cart = Cart::new();
        cart.add_item(&Catalog::standard(), ProductId::new(2), 1, LineOptions::new());
        let before = cart.compute_totals();
        for code in ["NAVOI15", "BEPUL", "nonsense"] {
            let _ = PromoOutcome::evaluate(code);
            assert_eq!(cart.compute_totals(), before);
        }
    }
}
