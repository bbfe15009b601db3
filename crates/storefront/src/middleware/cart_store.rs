//! Session-backed cart store.
//!
//! [`CartStore`] is an extractor: it loads the visitor's cart from the
//! session, applies mutations from `navoi_curtain_core::cart`, writes the
//! whole cart back, and queues the matching notification.

use axum::{extract::FromRequestParts, http::request::Parts};
use navoi_curtain_core::cart::{Cart, CartEvent, CartLineItem, LineOptions};
use navoi_curtain_core::catalog::Catalog;
use navoi_curtain_core::totals::Totals;
use navoi_curtain_core::ProductId;
use tower_sessions::Session;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::flash::push_notification;
use crate::middleware::session::session_from_parts;
use crate::models::{Notification, session_keys};
use crate::state::AppState;

/// Message shown when a line is removed.
pub const REMOVED_MESSAGE: &str = "Mahsulot savatdan olib tashlandi";

/// Load the cart from the session.
///
/// A missing or unreadable cart is treated as empty.
pub async fn load_cart(session: &Session) -> Cart {
    match session
        .get::<Vec<CartLineItem>>(session_keys::CART)
        .await
    {
        Ok(lines) => Cart::from_lines(lines.unwrap_or_default()),
        Err(e) => {
            tracing::warn!("Failed to read cart from session, starting empty: {e}");
            Cart::new()
        }
    }
}

/// The visitor's cart with session persistence.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(mut cart: CartStore) -> Result<Redirect> {
///     cart.add_item(ProductId::new(1), 1, LineOptions::new()).await?;
///     Ok(Redirect::to("/cart"))
/// }
/// ```
pub struct CartStore {
    session: Session,
    catalog: Catalog,
    cart: Cart,
}

impl FromRequestParts<AppState> for CartStore {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let session = session_from_parts(parts)?;
        Ok(Self::load(session, *state.catalog()).await)
    }
}

impl CartStore {
    /// Load the store for a session.
    pub async fn load(session: Session, catalog: Catalog) -> Self {
        let cart = load_cart(&session).await;
        Self {
            session,
            catalog,
            cart,
        }
    }

    /// Current cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Totals for the current contents.
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.cart.compute_totals()
    }

    /// Add a product. Unknown products are ignored without a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        options: LineOptions,
    ) -> Result<CartEvent> {
        let event = self
            .cart
            .add_item(&self.catalog, product_id, quantity, options);
        self.after(&event).await?;
        Ok(event)
    }

    /// Remove every line for a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn remove_item(&mut self, product_id: ProductId) -> Result<CartEvent> {
        let event = self.cart.remove_item(product_id);
        self.after(&event).await?;
        Ok(event)
    }

    /// Move a line's quantity by `delta`; zero or below removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn change_quantity(
        &mut self,
        product_id: ProductId,
        delta: i64,
    ) -> Result<CartEvent> {
        let event = self.cart.change_quantity(product_id, delta);
        self.after(&event).await?;
        Ok(event)
    }

    /// Set a line's quantity; zero or below removes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartEvent> {
        let event = self.cart.set_quantity(product_id, quantity);
        self.after(&event).await?;
        Ok(event)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    pub async fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        self.session.insert(session_keys::CART, &self.cart).await?;
        Ok(())
    }

    async fn after(&self, event: &CartEvent) -> Result<()> {
        match event {
            CartEvent::Added {
                product_id,
                name,
                quantity,
                merged,
            } => {
                self.persist().await?;
                tracing::info!(%product_id, quantity, merged, "Added to cart");
                let id = product_id.to_string();
                add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
                push_notification(
                    &self.session,
                    Notification::success(format!("{name} savatga qo'shildi!")),
                )
                .await?;
            }
            CartEvent::Removed { product_id, lines } => {
                self.persist().await?;
                tracing::info!(%product_id, lines, "Removed from cart");
                push_notification(&self.session, Notification::error(REMOVED_MESSAGE)).await?;
            }
            CartEvent::QuantityChanged {
                product_id,
                quantity,
            } => {
                self.persist().await?;
                tracing::debug!(%product_id, quantity, "Cart quantity changed");
            }
            CartEvent::Ignored => {
                tracing::debug!("Cart mutation ignored");
            }
        }
        Ok(())
    }
}
