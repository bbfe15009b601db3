//! Customer contact details: email addresses and Uzbek phone numbers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input is longer than [`Email::MAX_LENGTH`].
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// No `@` separates a local part from a domain.
    #[error("email must look like name@domain")]
    Malformed,
}

/// An email address with a non-empty local part and domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or is not of the
    /// form `local@domain`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        match s.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(s.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur when normalising a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The digits do not form an Uzbek number.
    #[error("Telefon raqam noto'g'ri formatda. Masalan: +998 90 123 45 67")]
    WrongFormat,
    /// The number has the country code but the wrong digit count.
    #[error("Telefon raqam to'liq emas. 12 raqamdan iborat bo'lishi kerak.")]
    Incomplete,
}

/// An Uzbek phone number in display form, e.g. `+998 90 123 45 67`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Country calling code for Uzbekistan.
    pub const COUNTRY_CODE: &'static str = "998";

    /// Normalise free-form input into `+998 XX XXX XX XX`.
    ///
    /// Every non-digit is dropped. A bare 9-digit subscriber number gets the
    /// country code prepended.
    ///
    /// # Errors
    ///
    /// [`PhoneError::WrongFormat`] if the digits neither start with `998` nor
    /// are a 9-digit subscriber number; [`PhoneError::Incomplete`] if the
    /// result is not exactly 12 digits.
    pub fn normalize(input: &str) -> Result<Self, PhoneError> {
        let mut digits: String = input.chars().filter(char::is_ascii_digit).collect();

        if !digits.starts_with(Self::COUNTRY_CODE) {
            if digits.len() == 9 {
                digits.insert_str(0, Self::COUNTRY_CODE);
            } else {
                return Err(PhoneError::WrongFormat);
            }
        }

        if digits.len() != 12 {
            return Err(PhoneError::Incomplete);
        }

        // All ASCII digits, so byte slicing is on char boundaries.
        let (cc, rest) = digits.split_at(3);
        let (operator, rest) = rest.split_at(2);
        let (a, rest) = rest.split_at(3);
        let (b, c) = rest.split_at(2);
        Ok(Self(format!("+{cc} {operator} {a} {b} {c}")))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_parse() {
        assert_eq!(
            Email::parse("  mijoz@navoi.uz ").unwrap().as_str(),
            "mijoz@navoi.uz"
        );
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("no-at"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("@navoi.uz"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("mijoz@"), Err(EmailError::Malformed));
        let long = format!("{}@x.uz", "a".repeat(Email::MAX_LENGTH));
        assert!(matches!(Email::parse(&long), Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_phone_full_international() {
        let phone = PhoneNumber::normalize("+998 (90) 123-45-67").unwrap();
        assert_eq!(phone.as_str(), "+998 90 123 45 67");
    }

    #[test]
    fn test_phone_subscriber_only_gets_country_code() {
        let phone = PhoneNumber::normalize("90 123 45 67").unwrap();
        assert_eq!(phone.as_str(), "+998 90 123 45 67");
    }

    #[test]
    fn test_phone_wrong_format() {
        assert_eq!(
            PhoneNumber::normalize("+7 912 345 67 89"),
            Err(PhoneError::WrongFormat)
        );
        assert_eq!(PhoneNumber::normalize(""), Err(PhoneError::WrongFormat));
    }

    #[test]
    fn test_phone_incomplete() {
        assert_eq!(
            PhoneNumber::normalize("+998 90 123 45"),
            Err(PhoneError::Incomplete)
        );
    }
}
