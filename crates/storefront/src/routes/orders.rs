//! Order receipt route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Path;
use navoi_curtain_core::order::{OrderNumber, OrderReceipt};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session_keys;
use crate::views::{CartLineView, PageContext, TotalsView};

/// Seconds before the receipt page returns to the home page.
pub const REDIRECT_DELAY_SECS: u32 = 2;

/// Order success template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/success.html")]
pub struct OrderSuccessTemplate {
    pub page: PageContext,
    pub order_number: String,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: Option<String>,
    pub delivery: &'static str,
    pub payment: &'static str,
    pub item_count: u32,
    pub lines: Vec<CartLineView>,
    pub totals: TotalsView,
    pub placed_at: String,
    pub redirect_delay: u32,
}

impl From<OrderReceipt> for OrderSuccessTemplate {
    fn from(receipt: OrderReceipt) -> Self {
        Self {
            page: PageContext::default(),
            order_number: receipt.order_number.to_string(),
            status_label: receipt.status.label(),
            status_color: receipt.status.color(),
            item_count: receipt.item_count(),
            lines: receipt.lines.iter().map(CartLineView::from).collect(),
            totals: receipt.totals.into(),
            placed_at: receipt.placed_at.format("%d.%m.%Y %H:%M").to_string(),
            customer_phone: receipt.customer.phone.as_str().to_string(),
            customer_name: receipt.customer.name,
            customer_address: receipt.customer.address,
            notes: receipt.customer.notes,
            delivery: receipt.delivery.label(),
            payment: receipt.payment.label(),
            redirect_delay: REDIRECT_DELAY_SECS,
        }
    }
}

/// Show the receipt for the visitor's most recent order.
///
/// Only the order stored in this session can be viewed.
#[instrument(skip(session))]
pub async fn success(session: Session, Path(number): Path<String>) -> Result<OrderSuccessTemplate> {
    let not_found = || AppError::NotFound(format!("order {number}"));
    let requested: OrderNumber = number.parse().map_err(|_| not_found())?;

    let receipt = session
        .get::<OrderReceipt>(session_keys::LAST_ORDER)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to read last order from session: {e}");
            None
        })
        .filter(|r| r.order_number == requested)
        .ok_or_else(not_found)?;

    let mut template = OrderSuccessTemplate::from(receipt);
    template.page = PageContext::load(&session).await;
    Ok(template)
}
