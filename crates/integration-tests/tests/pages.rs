//! Catalog, detail selector, contact, fragments, and health endpoints.

use navoi_curtain_core::faq::FAQ_ENTRIES;
use navoi_curtain_integration_tests::{TestApp, count};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/"))
        .send()
        .await
        .expect("request failed");

    let csp = resp
        .headers()
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(csp.contains("script-src 'none'"));
    assert_eq!(
        resp.headers().get("x-frame-options").map(|v| v.as_bytes()),
        Some(&b"DENY"[..])
    );
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_home_page_lists_featured_products_and_categories() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&body, "class=\"product-card\""), 6);
    assert!(body.contains("href=\"/products?category=luxury\""));
    assert!(body.contains("class=\"footer\""));
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/products?category=luxury").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"productsGrid\""));
    assert_eq!(count(&body, "data-category=\"luxury\""), 2);
    assert!(!body.contains("data-category=\"modern\""));
    assert!(body.contains("<option value=\"luxury\" selected>"));
}

#[tokio::test]
async fn test_listing_filters_by_price_band() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get("/products?price=300000-400000").await;
    assert_eq!(count(&body, "class=\"product-card\""), 4);

    let (_, body) = app.get("/products?price=500000%2B").await;
    assert_eq!(count(&body, "class=\"product-card\""), 2);

    // Garbage bands apply no price filter
    let (_, body) = app.get("/products?price=cheap").await;
    assert_eq!(count(&body, "class=\"product-card\""), 9);
}

#[tokio::test]
async fn test_listing_sorts_by_price() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get("/products?sort=price-low").await;
    let karniz = body.find("Premium Karniz").expect("karniz listed");
    let royal = body.find("Royal Oltin Parda").expect("royal listed");
    assert!(karniz < royal);

    let (_, body) = app.get("/products?sort=price-high").await;
    let karniz = body.find("Premium Karniz").expect("karniz listed");
    let royal = body.find("Royal Oltin Parda").expect("royal listed");
    assert!(royal < karniz);
}

#[tokio::test]
async fn test_listing_search() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get("/products?search=oltin").await;
    assert_eq!(count(&body, "class=\"product-card\""), 2);
    assert!(!body.contains("id=\"noResults\""));

    let (_, body) = app.get("/products?search=qwerty").await;
    assert_eq!(count(&body, "class=\"product-card\""), 0);
    assert!(body.contains("id=\"noResults\""));
}

#[tokio::test]
async fn test_detail_selector_links_keep_other_choices() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/products/3?size=200x250&qty=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"sizeOptions\""));
    assert!(body.contains("id=\"colorOptions\""));
    assert!(body.contains("id=\"materialOptions\""));
    assert_eq!(count(&body, "option-btn active"), 1);
    assert!(body.contains("href=\"/products/3?size=300x270&#38;qty=2\""));
    assert!(body.contains("href=\"/products/3?size=200x250&#38;color=Oq&#38;qty=2\""));
    assert!(body.contains("<span id=\"quantity\">2</span>"));
    assert!(body.contains("href=\"/products/3?size=200x250&#38;qty=3\""));
    assert!(body.contains("href=\"/products/3?size=200x250&#38;qty=1\""));
    // 2 x 520 000, using the product's own price
    assert!(body.contains("<strong id=\"totalPrice\">1 040 000 so"));
}

#[tokio::test]
async fn test_detail_stepper_clamps() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get("/products/1?qty=50").await;
    assert!(body.contains("<span id=\"quantity\">10</span>"));
    assert!(body.contains("href=\"/products/1?qty=10\""));

    let (_, body) = app.get("/products/1?qty=-3").await;
    assert!(body.contains("<span id=\"quantity\">1</span>"));
}

#[tokio::test]
async fn test_detail_add_posts_selection() {
    let app = TestApp::spawn().await;

    let resp = app
        .add_to_cart(
            "3",
            &[
                ("size", "300x270"),
                ("color", "Oltin"),
                ("material", ""),
                ("quantity", "2"),
                ("return_to", "/products/3?size=300x270&color=Oltin&qty=2"),
            ],
        )
        .await;
    assert_eq!(resp.url().path(), "/products/3");

    let (_, body) = app.get("/cart").await;
    assert!(body.contains("300x270"));
    assert!(body.contains("Oltin"));
    assert!(body.contains("<span class=\"quantity\">2</span>"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let app = TestApp::spawn().await;

    let (status, _) = app.get("/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/products/curtain").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_legacy_detail_url_redirects() {
    let app = TestApp::spawn().await;
    let client = TestApp::no_redirect_client();

    for (query, target) in [
        ("?id=4", "/products/4"),
        ("?id=abc", "/products/1"),
        ("", "/products/1"),
    ] {
        let resp = client
            .get(app.url(&format!("/product-detail{query}")))
            .send()
            .await
            .expect("request failed");
        assert!(resp.status().is_redirection());
        assert_eq!(
            resp.headers()
                .get("location")
                .and_then(|v| v.to_str().ok()),
            Some(target)
        );
    }
}

#[tokio::test]
async fn test_faq_opens_one_answer_at_a_time() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get("/contact").await;
    assert_eq!(count(&body, "class=\"faq-question\""), FAQ_ENTRIES.len());
    assert_eq!(count(&body, "class=\"faq-answer\""), 0);

    let (_, body) = app.get("/contact?faq=2").await;
    assert_eq!(count(&body, "class=\"faq-answer\""), 1);
    assert!(body.contains("href=\"/contact#faq-2\""));
    assert!(body.contains("href=\"/contact?faq=0#faq-0\""));
}

#[tokio::test]
async fn test_contact_form() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/contact",
            &[("name", "Aziza"), ("email", ""), ("message", "Salom!")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("id=\"contactSuccess\""));

    let resp = app
        .post_form("/contact", &[("name", ""), ("message", "")])
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.expect("body");
    assert!(!body.contains("id=\"contactSuccess\""));
}

#[tokio::test]
async fn test_partials_reflect_session_without_draining_notifications() {
    let app = TestApp::spawn().await;
    app.client
        .post(app.url("/cart/add"))
        .form(&[("product_id", "2"), ("return_to", "/partials/header")])
        .send()
        .await
        .expect("request failed");

    let (status, body) = app.get("/partials/header").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<header class=\"header\">"));
    assert!(body.contains("<span class=\"cart-count\">1</span>"));
    assert!(!body.contains("<html"));

    let (status, body) = app.get("/partials/footer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"footer\""));

    // The add notification is still waiting for a full page
    let (_, body) = app.get("/cart").await;
    assert!(body.contains("alert alert-success"));
}
