//! Session keys.
//!
//! Values stored under these keys keep the field names of the records the
//! shop has always persisted, so existing visitor state stays readable.

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart (a JSON array of line items).
    pub const CART: &str = "cart";

    /// Key for the signed-in demo user.
    pub const CURRENT_USER: &str = "currentUser";

    /// Key for pending flash notifications.
    pub const NOTIFICATIONS: &str = "notifications";

    /// Key for the most recent order receipt.
    pub const LAST_ORDER: &str = "lastOrder";
}
