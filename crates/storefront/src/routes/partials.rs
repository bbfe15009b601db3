//! Header and footer fragments.
//!
//! Full pages include the same markup; these routes serve it on its own for
//! pages that assemble themselves from fragments.

use askama::Template;
use axum::response::Html;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::views::PageContext;

/// Markup served when the header fragment cannot be rendered.
pub const FALLBACK_HEADER: &str = r#"<header class="header"><div class="container"><h1>Navoi <span class="golden">Curtain</span></h1></div></header>"#;

/// Markup served when the footer fragment cannot be rendered.
pub const FALLBACK_FOOTER: &str =
    r#"<footer class="footer"><div class="container"><p>Navoi Curtain</p></div></footer>"#;

/// Header fragment template.
#[derive(Template)]
#[template(path = "partials/header.html")]
pub struct HeaderTemplate {
    pub page: PageContext,
}

/// Footer fragment template.
#[derive(Template)]
#[template(path = "partials/footer.html")]
pub struct FooterTemplate {
    pub page: PageContext,
}

/// Render a fragment, falling back to static markup on failure.
fn render_or(template: &impl Template, fallback: &'static str) -> Html<String> {
    match template.render() {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::error!("Failed to render fragment: {e}");
            Html(fallback.to_string())
        }
    }
}

/// Header fragment: cart badge and user menu.
///
/// Pending notifications are left for the next full page.
#[instrument(skip(session))]
pub async fn header(session: Session) -> Html<String> {
    let page = PageContext::peek(&session).await;
    render_or(&HeaderTemplate { page }, FALLBACK_HEADER)
}

/// Footer fragment.
#[instrument(skip(session))]
pub async fn footer(session: Session) -> Html<String> {
    let page = PageContext::peek(&session).await;
    render_or(&FooterTemplate { page }, FALLBACK_FOOTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl std::fmt::Display for Broken {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[derive(Template)]
    #[template(source = "<p>{{ value }}</p>", ext = "html")]
    struct BrokenTemplate {
        value: Broken,
    }

    #[test]
    fn test_render_failure_falls_back() {
        let Html(body) = render_or(&BrokenTemplate { value: Broken }, FALLBACK_HEADER);
        assert_eq!(body, FALLBACK_HEADER);
    }

    #[test]
    fn test_header_renders_cart_count() {
        let page = PageContext {
            cart_count: 3,
            ..PageContext::default()
        };
        let Html(body) = render_or(&HeaderTemplate { page }, FALLBACK_HEADER);
        assert!(body.contains("cart-count"));
        assert!(body.contains('3'));
    }
}
