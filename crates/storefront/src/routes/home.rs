//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::{CategoryOption, PageContext, ProductCard};

/// Number of products shown on the home page.
const FEATURED_COUNT: usize = 6;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub featured: Vec<ProductCard>,
    pub categories: Vec<CategoryOption>,
}

/// Display the home page.
#[instrument(skip(state, page))]
pub async fn home(State(state): State<AppState>, page: PageContext) -> HomeTemplate {
    HomeTemplate {
        page,
        featured: state
            .catalog()
            .featured(FEATURED_COUNT)
            .iter()
            .map(ProductCard::from)
            .collect(),
        categories: CategoryOption::all(None),
    }
}
