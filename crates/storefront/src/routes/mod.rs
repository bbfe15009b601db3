//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//!
//! # Products
//! GET  /products               - Product listing (category, price, sort, search)
//! GET  /products/{id}          - Product detail (size, color, material, qty)
//! GET  /product-detail?id=N    - Legacy detail URL (redirects)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Change quantity (delta or absolute)
//! POST /cart/remove            - Remove a product
//! POST /cart/promo             - Apply promo code
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout page
//! POST /checkout               - Place order
//! GET  /orders/success/{number} - Order receipt
//!
//! # Auth (demo)
//! GET  /login                  - Login page
//! POST /login                  - Login action (rate limited)
//! GET  /register               - Register page
//! POST /register               - Register action (rate limited)
//! POST /logout                 - Logout action
//!
//! # Contact
//! GET  /contact                - Contact page and FAQ
//! POST /contact                - Contact form
//!
//! # Partials
//! GET  /partials/header        - Header fragment
//! GET  /partials/footer        - Footer fragment
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod orders;
pub mod partials;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/promo", post(cart::promo))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
///
/// Only the form posts are rate limited; the pages themselves are not.
pub fn auth_routes() -> Router<AppState> {
    let limited = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .layer(auth_rate_limiter());

    Router::new()
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        .route("/logout", post(auth::logout))
        .merge(limited)
}

/// Create the partial fragment routes router.
pub fn partial_routes() -> Router<AppState> {
    Router::new()
        .route("/header", get(partials::header))
        .route("/footer", get(partials::footer))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Health checks
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        // Product routes
        .nest("/products", product_routes())
        .route("/product-detail", get(products::legacy_detail))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::process))
        .route("/orders/success/{number}", get(orders::success))
        // Auth routes
        .merge(auth_routes())
        // Contact
        .route("/contact", get(contact::show).post(contact::submit))
        // Fragments
        .nest("/partials", partial_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies session database connectivity when sessions are stored in
/// `PostgreSQL`. Returns 503 Service Unavailable if it is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    let Some(pool) = state.pool() else {
        return StatusCode::OK;
    };
    match sqlx::query("SELECT 1").fetch_one(pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Local path to send the visitor back to after a form post.
///
/// Only same-site absolute paths are accepted; anything else falls back to
/// `default`.
#[must_use]
pub fn safe_return_path(requested: Option<&str>, default: &str) -> String {
    requested
        .map(str::trim)
        .filter(|p| p.starts_with('/') && !p.starts_with("//") && !p.contains('\\'))
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/products/3?qty=2"), "/cart"), "/products/3?qty=2");
        assert_eq!(safe_return_path(Some("//evil.example"), "/cart"), "/cart");
        assert_eq!(safe_return_path(Some("https://evil.example"), "/cart"), "/cart");
        assert_eq!(safe_return_path(None, "/cart"), "/cart");
    }
}
