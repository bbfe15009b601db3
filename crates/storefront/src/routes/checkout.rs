//! Checkout route handlers.
//!
//! There is no payment integration: placing an order validates the customer
//! details, stores an [`OrderReceipt`] in the session, and empties the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use navoi_curtain_core::checkout::{CheckoutError, CheckoutForm, DeliveryOption, PaymentOption};
use navoi_curtain_core::order::OrderReceipt;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::CartStore;
use crate::middleware::flash::push_notification;
use crate::models::{Notification, session_keys};
use crate::state::AppState;
use crate::views::{CartLineView, PageContext, TotalsView};

/// Shown when checkout is opened with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Savatingiz bo'sh";

/// Shown after an order is placed.
pub const ORDER_PLACED_MESSAGE: &str = "Buyurtma muvaffaqiyatli qabul qilindi!";

/// A radio choice in the delivery or payment group.
#[derive(Clone)]
pub struct ChoiceView {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

/// A validation message attached to a form field.
#[derive(Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub page: PageContext,
    pub lines: Vec<CartLineView>,
    pub totals: TotalsView,
    pub form: CheckoutForm,
    pub deliveries: Vec<ChoiceView>,
    pub payments: Vec<ChoiceView>,
    pub errors: Vec<FieldError>,
}

impl CheckoutTemplate {
    fn new(page: PageContext, cart: &CartStore, form: CheckoutForm, errors: &[CheckoutError]) -> Self {
        let delivery = form.delivery_option();
        let payment = form.payment_option();
        Self {
            page,
            lines: CartLineView::all(cart.cart()),
            totals: cart.totals().into(),
            deliveries: DeliveryOption::ALL
                .into_iter()
                .map(|d| ChoiceView {
                    value: d.slug(),
                    label: d.label(),
                    description: d.description(),
                    selected: d == delivery,
                })
                .collect(),
            payments: PaymentOption::ALL
                .into_iter()
                .map(|p| ChoiceView {
                    value: p.slug(),
                    label: p.label(),
                    description: "",
                    selected: p == payment,
                })
                .collect(),
            errors: errors
                .iter()
                .map(|e| FieldError {
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
            form,
        }
    }

    /// Error message for a field, if it failed validation.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Display the checkout page.
///
/// An empty cart sends the visitor back to `/cart`.
#[instrument(skip(session, cart))]
pub async fn show(session: Session, cart: CartStore) -> Result<Response> {
    if cart.cart().is_empty() {
        push_notification(&session, Notification::error(EMPTY_CART_MESSAGE)).await?;
        return Ok(Redirect::to("/cart").into_response());
    }

    let page = PageContext::load(&session).await;
    Ok(CheckoutTemplate::new(page, &cart, CheckoutForm::default(), &[]).into_response())
}

/// Place an order.
///
/// Invalid details re-render the form with 422; success redirects to the
/// receipt page.
#[instrument(skip(state, session, cart, form))]
pub async fn process(
    State(state): State<AppState>,
    session: Session,
    mut cart: CartStore,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    if cart.cart().is_empty() {
        push_notification(&session, Notification::error(EMPTY_CART_MESSAGE)).await?;
        return Ok(Redirect::to("/cart").into_response());
    }

    let details = match form.validate() {
        Ok(details) => details,
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "Checkout validation failed");
            let page = PageContext::load(&session).await;
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate::new(page, &cart, form, &errors),
            )
                .into_response());
        }
    };

    let placed_at = Utc::now();
    let order_number = state.next_order_number(placed_at.date_naive()).await;
    let receipt = OrderReceipt::new(order_number, cart.cart(), details, placed_at);

    session.insert(session_keys::LAST_ORDER, &receipt).await?;
    cart.clear().await?;

    tracing::info!(
        %order_number,
        items = receipt.item_count(),
        total = receipt.totals.total.amount(),
        delivery = receipt.delivery.slug(),
        payment = receipt.payment.slug(),
        "Order placed"
    );
    let number = order_number.to_string();
    add_breadcrumb("checkout", "Order placed", Some(&[("order_number", number.as_str())]));
    push_notification(&session, Notification::success(ORDER_PLACED_MESSAGE)).await?;

    Ok(Redirect::to(&format!("/orders/success/{number}")).into_response())
}
