//! Integration tests for the Navoi Curtain storefront.
//!
//! Each test starts the real router on an ephemeral port with an in-memory
//! session store and drives it over HTTP with a cookie-keeping client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p navoi-curtain-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::test]
//! async fn test_storefront_health() {
//!     let app = TestApp::spawn().await;
//!     let (status, body) = app.get("/health").await;
//!     assert_eq!(status, StatusCode::OK);
//!     assert_eq!(body, "ok");
//! }
//! ```

#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::path::PathBuf;

use navoi_curtain_storefront::config::StorefrontConfig;
use navoi_curtain_storefront::state::AppState;
use reqwest::{Client, Response, StatusCode, redirect::Policy};
use tower_sessions::MemoryStore;

/// A running storefront and a client with its own cookie jar.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: Client,
}

impl TestApp {
    /// Start a fresh storefront on `127.0.0.1:0`.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            port: 0,
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
            ..StorefrontConfig::default()
        };
        let app = navoi_curtain_storefront::app(AppState::new(config, None), MemoryStore::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { address, client }
    }

    /// Absolute URL for a path on this app.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    /// GET a path, following redirects, and return status and body.
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET");
        read(resp).await
    }

    /// POST a form, following redirects.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to send POST")
    }

    /// Add a product to the cart with optional extra form fields.
    pub async fn add_to_cart(&self, product_id: &str, extra: &[(&str, &str)]) -> Response {
        let mut form = vec![("product_id", product_id)];
        form.extend_from_slice(extra);
        self.post_form("/cart/add", &form).await
    }

    /// A client that does not follow redirects and keeps no cookies.
    #[must_use]
    pub fn no_redirect_client() -> Client {
        Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client")
    }
}

/// Status and body of a response.
pub async fn read(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let body = resp.text().await.expect("Failed to read body");
    (status, body)
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
#[must_use]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
