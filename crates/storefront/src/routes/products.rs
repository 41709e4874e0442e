//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use xyra_core::Catalog;

use super::NotFoundTemplate;
use super::page::{Page, ProductView};
use crate::filters;
use crate::state::AppState;

/// Number of products in the "related" strip.
const RELATED_LIMIT: usize = 3;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub page: Page,
    pub product: ProductView,
    pub related: Vec<ProductView>,
}

/// Display a product with related products from the same category.
///
/// An unknown ID renders the not-found page with a 404 status.
#[instrument(skip(state, page), fields(locale = %page.locale))]
pub async fn show(
    State(state): State<AppState>,
    Path((_lang, id)): Path<(String, String)>,
    page: Page,
) -> Response {
    let catalog = state.catalog();

    let Some(product) = catalog.get_by_id(&id) else {
        tracing::debug!(product_id = %id, "Product not found");
        return (StatusCode::NOT_FOUND, NotFoundTemplate { page }).into_response();
    };

    let related = ProductView::list(catalog.get_related(&id, RELATED_LIMIT), page.locale);

    ProductTemplate {
        product: ProductView::new(product, page.locale),
        related,
        page,
    }
    .into_response()
}
