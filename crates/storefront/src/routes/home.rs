//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use xyra_core::Catalog;

use super::page::{Page, ProductView};
use crate::filters;
use crate::state::AppState;

/// Number of products in the featured strip.
const FEATURED_COUNT: usize = 3;

/// Product promoted in the gifting section.
const GIFT_SET_ID: &str = "candy-box-set";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: Page,
    pub featured: Vec<ProductView>,
    pub gift_set: Option<ProductView>,
}

/// Display the home page: hero, featured products and the gift set.
#[instrument(skip_all, fields(locale = %page.locale))]
pub async fn home(State(state): State<AppState>, page: Page) -> impl IntoResponse {
    let catalog = state.catalog();
    let featured = ProductView::list(
        catalog.list_all().iter().take(FEATURED_COUNT),
        page.locale,
    );
    let gift_set = catalog
        .get_by_id(GIFT_SET_ID)
        .map(|product| ProductView::new(product, page.locale));

    HomeTemplate {
        page,
        featured,
        gift_set,
    }
}
