//! Navoi Curtain Core - catalog, cart, and checkout logic.
//!
//! This crate holds everything the storefront decides, with none of how it
//! is shown or stored:
//! - `storefront` - Public-facing shop that renders pages and keeps session state
//! - `integration-tests` - End-to-end flows against a running router
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Cart mutations return a [`cart::CartEvent`] and leave
//! persistence and notifications to the caller.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, contact details, and statuses
//! - [`catalog`] - The static product range
//! - [`cart`] - Cart lines and mutations
//! - [`totals`] - Subtotal, shipping, and total
//! - [`listing`] - Listing filter and sort
//! - [`selector`] - Product detail option selection
//! - [`checkout`] - Checkout form validation
//! - [`order`] - Order numbers and receipts
//! - [`promo`] - Promo code lookup
//! - [`auth`] - Demo sign-in
//! - [`faq`] - Contact page FAQ

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod faq;
pub mod listing;
pub mod order;
pub mod promo;
pub mod selector;
pub mod totals;
pub mod types;

pub use types::*;
