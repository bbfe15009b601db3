//! Demo login, registration, and logout.

use navoi_curtain_integration_tests::{TestApp, read};
use reqwest::StatusCode;

#[tokio::test]
async fn test_login_with_email_signs_in_demo_user() {
    let app = TestApp::spawn().await;

    let (status, body) = read(
        app.post_form(
            "/login",
            &[("username", "aziza@example.uz"), ("password", "secret")],
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"loginSuccess\""));
    assert!(!body.contains("id=\"loginError\""));
    assert!(body.contains("content=\"1.5;url=/\""));
    assert!(body.contains("Salom, Demo!"));

    let (_, body) = app.get("/").await;
    assert!(body.contains("class=\"user-dropdown\""));
    assert!(body.contains("Salom, Demo!"));
    assert!(body.contains("action=\"/logout\""));
}

#[tokio::test]
async fn test_login_without_password_fails() {
    let app = TestApp::spawn().await;

    let (status, body) = read(
        app.post_form("/login", &[("username", "901234567"), ("password", "")])
            .await,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("id=\"loginError\""));
    assert!(!body.contains("id=\"loginSuccess\""));
    assert!(body.contains("value=\"901234567\""));
}

#[tokio::test]
async fn test_logout_forgets_user() {
    let app = TestApp::spawn().await;
    app.post_form("/login", &[("username", "901234567"), ("password", "x")])
        .await;

    let resp = app.post_form("/logout", &[]).await;

    assert_eq!(resp.url().path(), "/");
    let (_, body) = read(resp).await;
    assert!(body.contains("Tizimdan chiqdingiz"));
    assert!(body.contains("alert alert-success"));
    assert!(!body.contains("Salom, Demo!"));
    assert!(body.contains("href=\"/login\""));
}

#[tokio::test]
async fn test_login_keeps_cart() {
    let app = TestApp::spawn().await;
    app.add_to_cart("3", &[]).await;

    app.post_form("/login", &[("username", "901234567"), ("password", "x")])
        .await;

    let (_, body) = app.get("/cart").await;
    assert!(body.contains("Hashamatli Bej Parda"));
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let app = TestApp::spawn().await;

    let (status, body) = read(
        app.post_form(
            "/register",
            &[
                ("firstName", "Aziza"),
                ("lastName", "Karimova"),
                ("email", "aziza@example.uz"),
                ("phone", "901234567"),
                ("password", "one"),
                ("confirmPassword", "two"),
            ],
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("id=\"registerError\""));
    assert!(body.contains("Parollar mos kelmaydi"));
    assert!(body.contains("value=\"Aziza\""));
}

#[tokio::test]
async fn test_register_success_redirects_to_login() {
    let app = TestApp::spawn().await;

    let (status, body) = read(
        app.post_form(
            "/register",
            &[
                ("firstName", "Aziza"),
                ("lastName", "Karimova"),
                ("password", "same"),
                ("confirmPassword", "same"),
            ],
        )
        .await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"registerSuccess\""));
    assert!(body.contains("content=\"2;url=/login\""));
}

#[tokio::test]
async fn test_login_posts_are_rate_limited() {
    let app = TestApp::spawn().await;

    let mut statuses = Vec::new();
    for _ in 0..8 {
        let resp = app
            .post_form("/login", &[("username", ""), ("password", "")])
            .await;
        statuses.push(resp.status());
    }

    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
    // Pages themselves are not limited
    let (status, _) = app.get("/login").await;
    assert_eq!(status, StatusCode::OK);
}
