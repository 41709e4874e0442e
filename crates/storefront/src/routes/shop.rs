//! Shop page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;
use xyra_core::{Catalog, Category};

use super::page::{Page, ProductView};
use crate::filters;
use crate::state::AppState;

/// Shop query parameters.
#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
}

/// A category filter tab.
pub struct CategoryTab {
    pub label_key: &'static str,
    pub href: String,
    pub active: bool,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub page: Page,
    pub tabs: Vec<CategoryTab>,
    pub products: Vec<ProductView>,
}

/// Display the product grid, optionally filtered by category.
///
/// An unknown category name shows every product, like "All".
#[instrument(skip(state, page), fields(locale = %page.locale))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
    page: Page,
) -> impl IntoResponse {
    let selected = query.category.as_deref().and_then(Category::from_name);
    let catalog = state.catalog();

    let products = match selected {
        Some(category) => ProductView::list(catalog.by_category(category), page.locale),
        None => ProductView::list(catalog.list_all(), page.locale),
    };

    let shop = page.href("/shop");
    let mut tabs = vec![CategoryTab {
        label_key: "shop.all",
        href: shop.clone(),
        active: selected.is_none(),
    }];
    tabs.extend(Category::ALL.into_iter().map(|category| CategoryTab {
        label_key: category.dictionary_key(),
        href: format!("{shop}?category={category}"),
        active: selected == Some(category),
    }));

    ShopTemplate {
        page,
        tabs,
        products,
    }
}
