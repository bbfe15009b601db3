//! Product listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use navoi_curtain_core::ProductId;
use navoi_curtain_core::listing::{ListingQuery, PRICE_BANDS, SortOrder};
use navoi_curtain_core::selector::{DetailSelection, OptionGroup};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::views::{CategoryOption, PageContext, ProductCard};

// =============================================================================
// Query Types
// =============================================================================

/// Listing filter parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub category: Option<String>,
    pub price: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// Detail page selection parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub qty: Option<String>,
}

/// Legacy `/product-detail?id=N` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct LegacyDetailParams {
    pub id: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// An option in a filter dropdown.
#[derive(Clone)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// An option button on the detail page.
#[derive(Clone)]
pub struct OptionButton {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// A group of option buttons.
#[derive(Clone)]
pub struct OptionGroupView {
    pub label: &'static str,
    pub container_id: &'static str,
    pub buttons: Vec<OptionButton>,
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub page: PageContext,
    pub products: Vec<ProductCard>,
    pub categories: Vec<CategoryOption>,
    pub price_bands: Vec<FilterOption>,
    pub sorts: Vec<FilterOption>,
    pub search: String,
    pub return_to: String,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub page: PageContext,
    pub product: ProductCard,
    pub groups: Vec<OptionGroupView>,
    pub quantity: u32,
    pub decrement_href: String,
    pub increment_href: String,
    pub total_price: String,
    pub size: String,
    pub color: String,
    pub material: String,
    pub return_to: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product listing.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    page: PageContext,
    Query(params): Query<ListingParams>,
) -> ProductsTemplate {
    let query = ListingQuery::from_params(
        params.category.as_deref(),
        params.price.as_deref(),
        params.sort.as_deref(),
        params.search.as_deref(),
    );
    let products: Vec<ProductCard> = query
        .apply(state.catalog())
        .into_iter()
        .map(ProductCard::from)
        .collect();
    tracing::debug!(visible = products.len(), "Listing filtered");

    let selected_band = params.price.as_deref().unwrap_or_default();
    let return_to = listing_href(&params);
    ProductsTemplate {
        page,
        products,
        categories: CategoryOption::all(query.category),
        price_bands: PRICE_BANDS
            .into_iter()
            .map(|(value, label)| FilterOption {
                value,
                label,
                selected: value == selected_band,
            })
            .collect(),
        sorts: SortOrder::ALL
            .into_iter()
            .map(|s| FilterOption {
                value: s.slug(),
                label: s.label(),
                selected: s == query.sort,
            })
            .collect(),
        search: query.search.unwrap_or_default(),
        return_to,
    }
}

/// Display a product with its option selector.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    page: PageContext,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<ProductShowTemplate> {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let selection = DetailSelection::from_params(
        params.size.as_deref(),
        params.color.as_deref(),
        params.material.as_deref(),
        params.qty.as_deref(),
    );
    let base = format!("/products/{}", product.id);
    let href = |s: DetailSelection| format!("{base}?{}", s.query_string());

    let groups = OptionGroup::ALL
        .into_iter()
        .map(|group| OptionGroupView {
            label: group.label(),
            container_id: group.container_id(),
            buttons: group
                .values()
                .iter()
                .copied()
                .map(|value| OptionButton {
                    label: group.value_label(value).to_string(),
                    href: href(selection.with(group, value)),
                    active: selection.is_active(group, value),
                })
                .collect(),
        })
        .collect();

    Ok(ProductShowTemplate {
        page,
        product: ProductCard::from(product),
        groups,
        quantity: selection.quantity,
        decrement_href: href(selection.step(-1)),
        increment_href: href(selection.step(1)),
        total_price: selection.total_price(product).to_string(),
        size: selection.size.unwrap_or_default().to_string(),
        color: selection.color.unwrap_or_default().to_string(),
        material: selection.material.unwrap_or_default().to_string(),
        return_to: href(selection),
    })
}

/// Redirect the legacy detail URL to the product page.
///
/// A missing, zero, or non-numeric id falls back to the first product.
#[instrument]
pub async fn legacy_detail(Query(params): Query<LegacyDetailParams>) -> Redirect {
    let id = legacy_product_id(params.id.as_deref());
    Redirect::permanent(&format!("/products/{id}"))
}

/// The listing URL for a set of filters, so forms can return to it.
fn listing_href(params: &ListingParams) -> String {
    let pairs: Vec<String> = [
        ("category", &params.category),
        ("price", &params.price),
        ("sort", &params.sort),
        ("search", &params.search),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| format!("{key}={}", urlencoding::encode(v)))
    })
    .collect();

    if pairs.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", pairs.join("&"))
    }
}

fn legacy_product_id(raw: Option<&str>) -> i32 {
    raw.and_then(|r| r.trim().parse::<i32>().ok())
        .filter(|id| *id != 0)
        .unwrap_or(1)
}
