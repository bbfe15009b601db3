//! Demo sign-in and registration.
//!
//! No accounts exist yet. Login fabricates a [`CurrentUser`] from whatever
//! identifier was typed and registration only checks the confirmation
//! field. Both will be replaced by a real account backend.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Phone used for demo users who signed in with an email address.
pub const DEMO_PHONE: &str = "+998901234567";

/// Email used for demo users who signed in with a phone number.
pub const DEMO_EMAIL: &str = "demo@email.com";

/// The signed-in visitor. Stored under the `currentUser` session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl CurrentUser {
    /// Fabricate the demo user for an identifier.
    ///
    /// An identifier containing `@` becomes the email; anything else is
    /// taken as the phone number.
    #[must_use]
    pub fn demo(identifier: &str) -> Self {
        let identifier = identifier.trim();
        let (email, phone) = if identifier.contains('@') {
            (identifier.to_owned(), DEMO_PHONE.to_owned())
        } else {
            (DEMO_EMAIL.to_owned(), identifier.to_owned())
        };
        Self {
            id: UserId::new(1),
            first_name: "Demo".to_owned(),
            last_name: "User".to_owned(),
            email,
            phone,
        }
    }
}

/// Login or registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("❌ Login va parolni kiriting")]
    MissingCredentials,
    #[error("❌ Parollar mos kelmaydi")]
    PasswordMismatch,
}

/// Submitted login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Accept any non-empty identifier and password.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingCredentials`] if either field is blank.
    pub fn authenticate(&self) -> Result<CurrentUser, AuthError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(CurrentUser::demo(&self.username))
    }
}

/// Submitted registration form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl RegisterForm {
    /// Check the password confirmation. Nothing is stored.
    ///
    /// # Errors
    ///
    /// [`AuthError::PasswordMismatch`] if the two passwords differ.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}
