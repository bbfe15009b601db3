//! Session-backed models for the storefront.

pub mod notification;
pub mod session;

pub use notification::{Notification, NotificationKind};
pub use session::keys as session_keys;
