//! Value types shared by the catalog, cart, and checkout.

pub mod contact;
pub mod id;
pub mod price;
pub mod status;

pub use contact::{Email, EmailError, PhoneError, PhoneNumber};
pub use id::*;
pub use price::Price;
pub use status::OrderStatus;
