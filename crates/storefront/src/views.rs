//! Display models shared by page templates.
//!
//! Templates only see plain strings, numbers, and booleans; everything that
//! needs a decision is decided here.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use navoi_curtain_core::auth::CurrentUser;
use navoi_curtain_core::cart::{Cart, CartLineItem};
use navoi_curtain_core::catalog::{Category, Product};
use navoi_curtain_core::totals::Totals;
use tower_sessions::Session;

use crate::middleware::auth::load_current_user;
use crate::middleware::cart_store::load_cart;
use crate::middleware::flash::take_notifications;
use crate::models::Notification;

/// Header and toast data every full page needs.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Sum of quantities in the cart (header badge).
    pub cart_count: u32,
    pub user: Option<CurrentUser>,
    pub notifications: Vec<Notification>,
}

impl PageContext {
    /// Read header state and drain pending notifications.
    pub async fn load(session: &Session) -> Self {
        let cart = load_cart(session).await;
        Self {
            cart_count: cart.item_count(),
            user: load_current_user(session).await,
            notifications: take_notifications(session).await,
        }
    }

    /// Header state without draining notifications (for fragments).
    pub async fn peek(session: &Session) -> Self {
        Self {
            cart_count: load_cart(session).await.item_count(),
            user: load_current_user(session).await,
            notifications: Vec::new(),
        }
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match parts.extensions.get::<Session>() {
            Some(session) => Self::load(session).await,
            None => Self::default(),
        })
    }
}

/// A product tile on the home and listing pages.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: i32,
    pub name: &'static str,
    pub glyph: &'static str,
    pub category: &'static str,
    pub category_label: &'static str,
    pub price_amount: i64,
    pub price: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name,
            glyph: product.image_glyph,
            category: product.category.slug(),
            category_label: product.category.label(),
            price_amount: product.unit_price.amount(),
            price: product.unit_price.to_string(),
        }
    }
}

/// A category link or filter option.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl CategoryOption {
    /// All categories, marking the selected one.
    #[must_use]
    pub fn all(selected: Option<Category>) -> Vec<Self> {
        Category::ALL
            .into_iter()
            .map(|c| Self {
                slug: c.slug(),
                label: c.label(),
                selected: selected == Some(c),
            })
            .collect()
    }
}

/// A cart line as shown on the cart, checkout, and receipt pages.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub glyph: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub options: String,
}

impl From<&CartLineItem> for CartLineView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            glyph: line.image_glyph.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.to_string(),
            line_total: line.line_total().to_string(),
            options: line.options_summary(),
        }
    }
}

impl CartLineView {
    /// Views for every line in a cart.
    #[must_use]
    pub fn all(cart: &Cart) -> Vec<Self> {
        cart.lines().iter().map(Self::from).collect()
    }
}

/// Formatted totals.
#[derive(Debug, Clone)]
pub struct TotalsView {
    pub subtotal: String,
    pub shipping: String,
    pub discount: String,
    pub total: String,
    pub free_shipping: bool,
}

impl From<Totals> for TotalsView {
    fn from(totals: Totals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            shipping: totals.shipping_label(),
            discount: totals.discount.to_string(),
            total: totals.total.to_string(),
            free_shipping: totals.shipping.is_zero(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use navoi_curtain_core::cart::LineOptions;
    use navoi_curtain_core::catalog::Catalog;
    use navoi_curtain_core::{Price, ProductId};
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::middleware::flash::push_notification;

    #[test]
    fn test_totals_view_shows_free_shipping_label() {
        let view = TotalsView::from(Totals::from_subtotal(Price::new(700_000)));
        assert_eq!(view.shipping, "Bepul");
        assert_eq!(view.total, "700 000 so'm");
        assert_eq!(view.discount, "0 so'm");
        assert!(view.free_shipping);
    }

    #[test]
    fn test_cart_line_view() {
        let mut cart = Cart::new();
        let options: LineOptions = [("size".to_string(), "200x250".to_string())]
            .into_iter()
            .collect();
        cart.add_item(&Catalog::standard(), ProductId::new(5), 2, options);
        let view = CartLineView::all(&cart).pop().unwrap();
        assert_eq!(view.line_total, "780 000 so'm");
        assert_eq!(view.options, "200x250");
    }

    #[tokio::test]
    async fn test_page_context_drains_but_peek_does_not() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        push_notification(&session, Notification::success("Salom"))
            .await
            .unwrap();

        assert!(PageContext::peek(&session).await.notifications.is_empty());
        assert_eq!(PageContext::load(&session).await.notifications.len(), 1);
        assert!(PageContext::load(&session).await.notifications.is_empty());
    }
}
