//! Checkout form: delivery, payment, and customer details.
//!
//! No payment is taken. A validated [`CheckoutForm`] becomes a
//! [`CheckoutDetails`], which the storefront turns into an order receipt.

use serde::{Deserialize, Serialize};

use crate::types::{PhoneError, PhoneNumber};

/// Maximum length of the customer name.
pub const MAX_NAME_LENGTH: usize = 100;

/// How the order reaches the customer.
///
/// The choice is recorded on the receipt but does not change shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Standard,
    Express,
    Pickup,
}

impl DeliveryOption {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Pickup];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Pickup => "pickup",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Oddiy yetkazib berish",
            Self::Express => "Tezkor yetkazib berish",
            Self::Pickup => "Do'kondan olib ketish",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Standard => "3-5 ish kuni",
            Self::Express => "1-2 ish kuni",
            Self::Pickup => "Navoiy shahri, do'konimizdan",
        }
    }

    /// Parse a form value; unknown values fall back to the default.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|d| d.slug() == raw.trim())
            .unwrap_or_default()
    }
}

/// How the customer pays on delivery or online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOption {
    #[default]
    Cash,
    Card,
    Click,
    Payme,
}

impl PaymentOption {
    pub const ALL: [Self; 4] = [Self::Cash, Self::Card, Self::Click, Self::Payme];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Click => "click",
            Self::Payme => "payme",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Naqd pul",
            Self::Card => "Bank kartasi",
            Self::Click => "Click",
            Self::Payme => "Payme",
        }
    }

    /// Parse a form value; unknown values fall back to the default.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == raw.trim())
            .unwrap_or_default()
    }
}

/// A checkout field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Ism kiritilishi shart")]
    NameRequired,
    #[error("Ism {max} belgidan oshmasligi kerak")]
    NameTooLong { max: usize },
    #[error(transparent)]
    Phone(#[from] PhoneError),
    #[error("Manzil kiritilishi shart")]
    AddressRequired,
}

impl CheckoutError {
    /// Form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameTooLong { .. } => "customer_name",
            Self::Phone(_) => "customer_phone",
            Self::AddressRequired => "customer_address",
        }
    }
}

/// Raw checkout submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub delivery: String,
    #[serde(default)]
    pub payment: String,
}

/// Customer details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: PhoneNumber,
    pub address: String,
    pub notes: Option<String>,
}

/// A validated checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub customer: CustomerDetails,
    pub delivery: DeliveryOption,
    pub payment: PaymentOption,
}

impl CheckoutForm {
    /// Delivery choice, defaulting to standard.
    #[must_use]
    pub fn delivery_option(&self) -> DeliveryOption {
        DeliveryOption::from_param(&self.delivery)
    }

    /// Payment choice, defaulting to cash.
    #[must_use]
    pub fn payment_option(&self) -> PaymentOption {
        PaymentOption::from_param(&self.payment)
    }

    /// Validate every field, collecting all errors.
    ///
    /// # Errors
    ///
    /// Returns one [`CheckoutError`] per failing field, in form order.
    pub fn validate(&self) -> Result<CheckoutDetails, Vec<CheckoutError>> {
        let mut errors = Vec::new();

        let name = self.customer_name.trim();
        if name.is_empty() {
            errors.push(CheckoutError::NameRequired);
        } else if name.chars().count() > MAX_NAME_LENGTH {
            errors.push(CheckoutError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }

        let phone = PhoneNumber::normalize(&self.customer_phone)
            .map_err(|e| errors.push(e.into()))
            .ok();

        let address = self.customer_address.trim();
        if address.is_empty() {
            errors.push(CheckoutError::AddressRequired);
        }

        match phone {
            Some(phone) if errors.is_empty() => {
                let notes = self.notes.trim();
                Ok(CheckoutDetails {
                    customer: CustomerDetails {
                        name: name.to_owned(),
                        phone,
                        address: address.to_owned(),
                        notes: (!notes.is_empty()).then(|| notes.to_owned()),
                    },
                    delivery: self.delivery_option(),
                    payment: self.payment_option(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Aziza Karimova".to_owned(),
            customer_phone: "90 123 45 67".to_owned(),
            customer_address: "Navoiy sh., Alisher Navoiy ko'chasi 12".to_owned(),
            notes: "  ".to_owned(),
            delivery: "express".to_owned(),
            payment: "click".to_owned(),
        }
    }

    #[test]
    fn test_valid_form() {
        let details = valid_form().validate().unwrap();
        assert_eq!(details.customer.phone.as_str(), "+998 90 123 45 67");
        assert_eq!(details.customer.notes, None);
        assert_eq!(details.delivery, DeliveryOption::Express);
        assert_eq!(details.payment, PaymentOption::Click);
    }

    #[test]
    fn test_defaults_for_unknown_options() {
        let form = CheckoutForm {
            delivery: "drone".to_owned(),
            payment: String::new(),
            ..valid_form()
        };
        let details = form.validate().unwrap();
        assert_eq!(details.delivery, DeliveryOption::Standard);
        assert_eq!(details.payment, PaymentOption::Cash);
    }

    #[test]
    fn test_collects_every_error() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(CheckoutError::field).collect();
        assert_eq!(
            fields,
            vec!["customer_name", "customer_phone", "customer_address"]
        );
    }

    #[test]
    fn test_name_length_limit() {
        let form = CheckoutForm {
            customer_name: "a".repeat(MAX_NAME_LENGTH + 1),
            ..valid_form()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec![CheckoutError::NameTooLong {
                max: MAX_NAME_LENGTH
            }]
        );
    }

    #[test]
    fn test_phone_error_message_is_customer_facing() {
        let form = CheckoutForm {
            customer_phone: "12345".to_owned(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first().unwrap().to_string(),
            "Telefon raqam noto'g'ri formatda. Masalan: +998 90 123 45 67"
        );
    }
}
