//! Cart route handlers.
//!
//! Every mutation is a plain form post that redirects back, so the cart
//! works without JavaScript. The cart itself lives in the session under
//! `cart`; see [`CartStore`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::Redirect,
};
use navoi_curtain_core::ProductId;
use navoi_curtain_core::promo::PromoOutcome;
use navoi_curtain_core::selector::DetailSelection;
use serde::Deserialize;
use tracing::instrument;

use super::safe_return_path;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CartStore;
use crate::views::{CartLineView, PageContext, TotalsView};

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
///
/// Option fields are optional; anything outside the known values is dropped.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub return_to: Option<String>,
}

/// Update cart form data.
///
/// `delta` moves the quantity; `quantity` sets it outright.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub delta: Option<String>,
    pub quantity: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Promo code form data.
#[derive(Debug, Deserialize)]
pub struct PromoForm {
    #[serde(default)]
    pub code: String,
}

/// Cart page query.
#[derive(Debug, Default, Deserialize)]
pub struct CartQuery {
    pub promo: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub totals: TotalsView,
    pub promo_code: String,
    pub promo_message: Option<String>,
    pub promo_applied: bool,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(page, cart))]
pub async fn show(page: PageContext, cart: CartStore, Query(query): Query<CartQuery>) -> CartShowTemplate {
    let promo_code = query
        .promo
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    let outcome = promo_code.as_deref().map(PromoOutcome::evaluate);
    if let Some(outcome) = &outcome {
        tracing::debug!(applied = outcome.is_applied(), "Promo code checked");
    }

    CartShowTemplate {
        page,
        lines: CartLineView::all(cart.cart()),
        line_count: cart.cart().line_count(),
        totals: cart.totals().into(),
        promo_code: promo_code.unwrap_or_default(),
        promo_message: outcome.as_ref().map(PromoOutcome::message),
        promo_applied: outcome.is_some_and(|o| o.is_applied()),
    }
}

/// Add a product to the cart.
///
/// Unknown products are ignored. Redirects to `return_to` or the cart.
#[instrument(skip(cart))]
pub async fn add(mut cart: CartStore, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let product_id = parse_product_id(&form.product_id)?;
    let selection = DetailSelection::from_params(
        form.size.as_deref(),
        form.color.as_deref(),
        form.material.as_deref(),
        form.quantity.as_deref(),
    );

    cart.add_item(product_id, selection.quantity, selection.options())
        .await?;

    Ok(Redirect::to(&safe_return_path(
        form.return_to.as_deref(),
        "/cart",
    )))
}

/// Change a line's quantity.
#[instrument(skip(cart))]
pub async fn update(mut cart: CartStore, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let product_id = parse_product_id(&form.product_id)?;

    if let Some(quantity) = parse_number(form.quantity.as_deref(), "quantity")? {
        cart.set_quantity(product_id, quantity).await?;
    } else if let Some(delta) = parse_number(form.delta.as_deref(), "delta")? {
        cart.change_quantity(product_id, delta).await?;
    } else {
        return Err(AppError::BadRequest(
            "either delta or quantity is required".to_string(),
        ));
    }

    Ok(Redirect::to("/cart"))
}

/// Remove a product from the cart.
#[instrument(skip(cart))]
pub async fn remove(mut cart: CartStore, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let product_id = parse_product_id(&form.product_id)?;
    cart.remove_item(product_id).await?;
    Ok(Redirect::to("/cart"))
}

/// Apply a promo code.
///
/// Codes only change the message on the cart page, so the code travels in
/// the redirect rather than the session.
#[instrument]
pub async fn promo(Form(form): Form<PromoForm>) -> Redirect {
    let code = form.code.trim();
    if code.is_empty() {
        return Redirect::to("/cart");
    }
    Redirect::to(&format!("/cart?promo={}#promoCode", urlencoding::encode(code)))
}

/// Cart count badge fragment.
#[instrument(skip(cart))]
pub async fn count(cart: CartStore) -> CartCountTemplate {
    CartCountTemplate {
        count: cart.cart().item_count(),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_product_id(raw: &str) -> Result<ProductId> {
    raw.trim()
        .parse::<ProductId>()
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {raw}")))
}

/// Parse an optional integer field; blank counts as absent.
fn parse_number(raw: Option<&str>, field: &str) -> Result<Option<i64>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {field}: {s}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_treats_blank_as_absent() {
        assert_eq!(parse_number(None, "delta").unwrap(), None);
        assert_eq!(parse_number(Some("  "), "delta").unwrap(), None);
        assert_eq!(parse_number(Some("-1"), "delta").unwrap(), Some(-1));
        assert!(matches!(
            parse_number(Some("two"), "delta"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(" 4 ").unwrap(), ProductId::new(4));
        assert!(parse_product_id("curtain").is_err());
    }
}
