//! HTTP middleware and request-scoped stores for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions, `PostgreSQL` or memory store)
//! 5. Security headers (CSP, frame and MIME protections)
//! 6. Rate limiting (governor, auth form posts only)
//!
//! The cart and signed-in user are exposed to handlers as the
//! [`CartStore`] and [`UserStore`] extractors.

pub mod auth;
pub mod cart_store;
pub mod flash;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::UserStore;
pub use cart_store::CartStore;
pub use rate_limit::auth_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
